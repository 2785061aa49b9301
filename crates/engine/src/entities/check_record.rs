//! Check record entity operations.

use std::sync::Arc;

use poolcheck_domain::{CheckRecordId, PoolConfiguration, RealizedPool, UserId, Visibility};

use crate::infrastructure::ports::{
    CheckRecord, CheckRecordRepo, ClockPort, NewCheckRecord, RecordFlags, RepoError,
};

/// Flag namespace owned by the engine.
pub const FLAG_NAMESPACE: &str = "poolcheck";
/// Flag key holding the serialized [`PoolConfiguration`].
pub const CONFIGURATION_FLAG: &str = "configuration";

/// Check record operations.
///
/// Owns the flag layout: the configuration is stored as JSON under
/// `poolcheck.configuration` and the realized dice on the record itself.
pub struct CheckRecords {
    repo: Arc<dyn CheckRecordRepo>,
    clock: Arc<dyn ClockPort>,
}

impl CheckRecords {
    pub fn new(repo: Arc<dyn CheckRecordRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { repo, clock }
    }

    pub async fn create(
        &self,
        author: UserId,
        content: String,
        configuration: &PoolConfiguration,
        realized_pool: RealizedPool,
        visibility: Visibility,
    ) -> Result<CheckRecordId, RepoError> {
        let record = NewCheckRecord {
            author,
            content,
            flags: configuration_flags(configuration)?,
            realized_pool,
            visibility,
            created_at: self.clock.now(),
        };
        self.repo.create(&record).await
    }

    pub async fn get(&self, id: CheckRecordId) -> Result<Option<CheckRecord>, RepoError> {
        self.repo.get(id).await
    }

    /// Stored configuration of a record, if any.
    ///
    /// A payload that is present but doesn't deserialize is an error.
    pub async fn configuration(
        &self,
        id: CheckRecordId,
    ) -> Result<Option<PoolConfiguration>, RepoError> {
        match self
            .repo
            .get_flag(id, FLAG_NAMESPACE, CONFIGURATION_FLAG)
            .await?
        {
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(RepoError::serialization),
            None => Ok(None),
        }
    }

    /// Replace content and configuration in place.
    pub async fn update(
        &self,
        id: CheckRecordId,
        content: &str,
        configuration: &PoolConfiguration,
    ) -> Result<(), RepoError> {
        let flags = configuration_flags(configuration)?;
        self.repo.update(id, content, &flags).await
    }
}

fn configuration_flags(configuration: &PoolConfiguration) -> Result<RecordFlags, RepoError> {
    let value = serde_json::to_value(configuration).map_err(RepoError::serialization)?;
    Ok(RecordFlags::new().with(FLAG_NAMESPACE, CONFIGURATION_FLAG, value))
}
