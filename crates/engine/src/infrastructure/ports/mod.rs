//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - The host's dice roller
//! - The host's persisted message store
//! - Label lookup and template rendering
//! - The host's roll privacy setting
//! - Clock/Random (for testing)

mod error;
mod external;
mod repos;
mod testing;
pub mod types;

// =============================================================================
// Record Store Port
// =============================================================================
pub use repos::CheckRecordRepo;

// =============================================================================
// Types from types module (re-export for visibility)
// =============================================================================
pub use types::{
    CheckCard, CheckRecord, DieView, NewCheckRecord, RecordFlags, CHECK_CARD_TEMPLATE,
};

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{DicePort, LabelPort, RollPrivacyPort, TemplatePort};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::MockCheckRecordRepo;

#[cfg(test)]
pub use external::{MockDicePort, MockLabelPort, MockRollPrivacyPort, MockTemplatePort};

#[cfg(test)]
pub use testing::{MockClockPort, MockRandomPort};

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::{ClockPort, RandomPort};

// =============================================================================
// Error Types
// =============================================================================
pub use error::{DiceError, RenderError, RepoError};
