//! Application state and composition.

use std::sync::Arc;

use crate::entities::CheckRecords;
use crate::infrastructure::{
    clock::{SystemClock, SystemRandom},
    config::EngineConfig,
    dice::RandomDice,
    labels::LabelCatalog,
    ports::{CheckRecordRepo, ClockPort, DicePort, LabelPort, RandomPort, TemplatePort},
    privacy::ConfiguredPrivacy,
    record_store::InMemoryCheckRecords,
    templates::CheckCardRenderer,
};
use crate::use_cases::{self, check::CheckPresenter};

/// Main application state.
///
/// Holds the entity modules and use cases. Passed to the interaction handler.
pub struct App {
    pub entities: Entities,
    pub use_cases: UseCases,
    /// Roll privacy, switchable while running
    pub privacy: Arc<ConfiguredPrivacy>,
}

/// Container for entity modules.
pub struct Entities {
    pub check_records: Arc<CheckRecords>,
}

/// Container for all use cases.
pub struct UseCases {
    pub check: use_cases::CheckUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        record_repo: Arc<dyn CheckRecordRepo>,
        dice: Arc<dyn DicePort>,
        labels: Arc<dyn LabelPort>,
        templates: Arc<dyn TemplatePort>,
        privacy: Arc<ConfiguredPrivacy>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let check_records = Arc::new(CheckRecords::new(record_repo, clock));
        let presenter = Arc::new(CheckPresenter::new(labels, templates));

        let perform = Arc::new(use_cases::check::PerformCheck::new(
            dice,
            presenter.clone(),
            privacy.clone(),
            check_records.clone(),
        ));
        let revise = Arc::new(use_cases::check::ReviseCheck::new(
            check_records.clone(),
            presenter,
        ));
        let adjust = Arc::new(use_cases::check::AdjustDifficulty::new(
            check_records.clone(),
            revise.clone(),
        ));

        Self {
            entities: Entities { check_records },
            use_cases: UseCases {
                check: use_cases::CheckUseCases::new(perform, revise, adjust),
            },
            privacy,
        }
    }

    /// Wire the reference adapters: system randomness, an in-memory record
    /// store, the built-in label catalog and the HTML card renderer.
    pub fn in_memory(config: &EngineConfig) -> Self {
        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
        let random: Arc<dyn RandomPort> = Arc::new(SystemRandom::new());

        Self::new(
            Arc::new(InMemoryCheckRecords::new(clock.clone())),
            Arc::new(RandomDice::new(random)),
            Arc::new(LabelCatalog::new()),
            Arc::new(CheckCardRenderer::new()),
            Arc::new(ConfiguredPrivacy::new(
                config.roll_mode,
                config.gm_users.clone(),
            )),
            clock,
        )
    }
}
