//! Check use cases.
//!
//! A check is rolled once and recorded. The flow is:
//! 1. Roller invokes a check (PerformCheck)
//! 2. Dice are realized, resolved, rendered and stored on a new record
//! 3. Anyone with the record can revise it later (ReviseCheck, AdjustDifficulty)
//!
//! Revisions re-resolve the stored dice. They never roll again.

use std::sync::Arc;

use poolcheck_domain::{
    resolve, CheckRecordId, ConfigurationOverride, Difficulty, DomainError, PoolConfiguration,
    Resolution, UserId, Visibility,
};

mod presenter;

pub use presenter::CheckPresenter;

use crate::entities::CheckRecords;
use crate::infrastructure::ports::{DiceError, DicePort, RenderError, RepoError, RollPrivacyPort};

/// Container for check use cases.
pub struct CheckUseCases {
    pub perform: Arc<PerformCheck>,
    pub revise: Arc<ReviseCheck>,
    pub adjust: Arc<AdjustDifficulty>,
}

impl CheckUseCases {
    pub fn new(
        perform: Arc<PerformCheck>,
        revise: Arc<ReviseCheck>,
        adjust: Arc<AdjustDifficulty>,
    ) -> Self {
        Self {
            perform,
            revise,
            adjust,
        }
    }
}

/// A check as invoked by the roller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRequest {
    pub roller: UserId,
    /// Negative counts are treated as zero; counts above
    /// [`poolcheck_domain::MAX_ATTRIBUTE_DICE`] are rejected
    pub attribute_die_count: i32,
    pub attribute_name: String,
    pub difficulty: Difficulty,
    pub skill_name: String,
    pub skill_break: bool,
    pub skill_push: bool,
}

impl CheckRequest {
    pub fn configuration(&self) -> Result<PoolConfiguration, DomainError> {
        Ok(
            PoolConfiguration::checked(self.attribute_die_count, self.difficulty)?
                .with_attribute(self.attribute_name.clone())
                .with_skill(self.skill_name.clone())
                .with_break(self.skill_break)
                .with_push(self.skill_push),
        )
    }
}

/// A newly recorded check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub record_id: CheckRecordId,
    pub content: String,
    pub configuration: PoolConfiguration,
    pub resolution: Resolution,
    pub visibility: Visibility,
}

/// Outcome of a revision request.
#[derive(Debug, Clone, PartialEq)]
pub enum Revision {
    /// The record was re-resolved and updated
    Applied(RevisedCheck),
    /// Difficulty was already at that end of the scale; nothing written
    Unchanged,
    /// There was nothing to revise; nothing written
    Skipped(SkipReason),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevisedCheck {
    pub content: String,
    pub configuration: PoolConfiguration,
    pub resolution: Resolution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    RecordNotFound,
    MissingConfiguration,
    MissingDice,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::RecordNotFound => write!(f, "record not found"),
            SkipReason::MissingConfiguration => write!(f, "no stored configuration"),
            SkipReason::MissingDice => write!(f, "no stored dice"),
        }
    }
}

/// Roll, resolve and record a new check.
///
/// Nothing is persisted unless every step before the store succeeds.
pub struct PerformCheck {
    dice: Arc<dyn DicePort>,
    presenter: Arc<CheckPresenter>,
    privacy: Arc<dyn RollPrivacyPort>,
    records: Arc<CheckRecords>,
}

impl PerformCheck {
    pub fn new(
        dice: Arc<dyn DicePort>,
        presenter: Arc<CheckPresenter>,
        privacy: Arc<dyn RollPrivacyPort>,
        records: Arc<CheckRecords>,
    ) -> Self {
        Self {
            dice,
            presenter,
            privacy,
            records,
        }
    }

    pub async fn execute(&self, request: CheckRequest) -> Result<CheckResult, CheckError> {
        let configuration = request.configuration()?;
        let expression = configuration.pool_expression();

        let pool = self.dice.realize(&expression).await?;
        if !pool.matches(&expression) {
            return Err(DiceError::PoolMismatch {
                requested: expression.to_string(),
                attribute: pool.attribute_faces().len(),
                fate: pool.fate_faces().len(),
            }
            .into());
        }

        let resolution = resolve(
            &pool,
            configuration.difficulty,
            configuration.skill_break,
            configuration.skill_push,
        );
        let content = self.presenter.render(&configuration, &resolution)?;
        let visibility = self
            .privacy
            .roll_mode()
            .visibility(request.roller, &self.privacy.privileged_recipients());

        let record_id = self
            .records
            .create(
                request.roller,
                content.clone(),
                &configuration,
                pool,
                visibility.clone(),
            )
            .await?;

        tracing::info!(
            record_id = %record_id,
            pool = %expression,
            difficulty = %configuration.difficulty,
            score = resolution.score,
            tier = %resolution.tier,
            "Check recorded"
        );

        Ok(CheckResult {
            record_id,
            content,
            configuration,
            resolution,
            visibility,
        })
    }
}

/// Re-resolve a stored check with a configuration override.
pub struct ReviseCheck {
    records: Arc<CheckRecords>,
    presenter: Arc<CheckPresenter>,
}

impl ReviseCheck {
    pub fn new(records: Arc<CheckRecords>, presenter: Arc<CheckPresenter>) -> Self {
        Self { records, presenter }
    }

    pub async fn execute(
        &self,
        record_id: CheckRecordId,
        changes: &ConfigurationOverride,
    ) -> Result<Revision, CheckError> {
        let Some(record) = self.records.get(record_id).await? else {
            return Ok(skipped(record_id, SkipReason::RecordNotFound));
        };
        let Some(stored) = self.records.configuration(record_id).await? else {
            return Ok(skipped(record_id, SkipReason::MissingConfiguration));
        };
        let Some(pool) = record.realized_pool else {
            return Ok(skipped(record_id, SkipReason::MissingDice));
        };

        let configuration = stored.merged(changes);
        let resolution = resolve(
            &pool,
            configuration.difficulty,
            configuration.skill_break,
            configuration.skill_push,
        );
        let content = self.presenter.render(&configuration, &resolution)?;
        self.records
            .update(record_id, &content, &configuration)
            .await?;

        tracing::info!(
            record_id = %record_id,
            difficulty = %configuration.difficulty,
            score = resolution.score,
            tier = %resolution.tier,
            "Check revised"
        );

        Ok(Revision::Applied(RevisedCheck {
            content,
            configuration,
            resolution,
        }))
    }
}

/// Step a stored check's difficulty one tier down or up.
pub struct AdjustDifficulty {
    records: Arc<CheckRecords>,
    revise: Arc<ReviseCheck>,
}

impl AdjustDifficulty {
    pub fn new(records: Arc<CheckRecords>, revise: Arc<ReviseCheck>) -> Self {
        Self { records, revise }
    }

    /// Tough -> Challenging -> Trivial.
    pub async fn lower(&self, record_id: CheckRecordId) -> Result<Revision, CheckError> {
        self.step(record_id, Difficulty::lower).await
    }

    /// Trivial -> Challenging -> Tough.
    pub async fn raise(&self, record_id: CheckRecordId) -> Result<Revision, CheckError> {
        self.step(record_id, Difficulty::raise).await
    }

    async fn step(
        &self,
        record_id: CheckRecordId,
        next: fn(Difficulty) -> Difficulty,
    ) -> Result<Revision, CheckError> {
        if self.records.get(record_id).await?.is_none() {
            return Ok(skipped(record_id, SkipReason::RecordNotFound));
        }
        let Some(stored) = self.records.configuration(record_id).await? else {
            return Ok(skipped(record_id, SkipReason::MissingConfiguration));
        };

        let current = stored.difficulty;
        let target = next(current);
        if target == current {
            tracing::debug!(
                record_id = %record_id,
                difficulty = %current,
                "Difficulty already at the end of the scale"
            );
            return Ok(Revision::Unchanged);
        }

        self.revise
            .execute(record_id, &ConfigurationOverride::difficulty(target))
            .await
    }
}

fn skipped(record_id: CheckRecordId, reason: SkipReason) -> Revision {
    tracing::debug!(record_id = %record_id, reason = %reason, "Check revision skipped");
    Revision::Skipped(reason)
}

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("Invalid check: {0}")]
    Invalid(#[from] DomainError),
    #[error("Dice error: {0}")]
    Dice(#[from] DiceError),
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
