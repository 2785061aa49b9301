//! External service port traits (dice, labels, templates, roll privacy).

use async_trait::async_trait;
use poolcheck_domain::{PoolExpression, RealizedPool, RollMode, UserId};

use super::error::{DiceError, RenderError};

// =============================================================================
// Dice Service
// =============================================================================

/// The host's dice roller.
///
/// Realizes both sub-pools of the expression as one roll event and returns
/// exactly the requested number of faces per sub-pool, each uniform over its
/// die's range.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DicePort: Send + Sync {
    async fn realize(&self, expression: &PoolExpression) -> Result<RealizedPool, DiceError>;
}

// =============================================================================
// Label Lookup
// =============================================================================

/// Display labels. Pure and total: every key yields some string.
#[cfg_attr(test, mockall::automock)]
pub trait LabelPort: Send + Sync {
    fn translate(&self, key: &str) -> String;
}

// =============================================================================
// Template Rendering
// =============================================================================

/// Pure rendering of a data bag into record content.
#[cfg_attr(test, mockall::automock)]
pub trait TemplatePort: Send + Sync {
    fn render(&self, template_id: &str, data: &serde_json::Value) -> Result<String, RenderError>;
}

// =============================================================================
// Roll Privacy
// =============================================================================

/// Host-level roll privacy setting.
#[cfg_attr(test, mockall::automock)]
pub trait RollPrivacyPort: Send + Sync {
    fn roll_mode(&self) -> RollMode;
    /// Users who receive private and blind records (the GMs).
    fn privileged_recipients(&self) -> Vec<UserId>;
}
