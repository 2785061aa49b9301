//! Roll privacy from configuration.

use std::sync::RwLock;

use poolcheck_domain::{RollMode, UserId};

use crate::infrastructure::ports::RollPrivacyPort;

/// Roll mode and GM list, switchable at runtime.
pub struct ConfiguredPrivacy {
    roll_mode: RwLock<RollMode>,
    gm_users: Vec<UserId>,
}

impl ConfiguredPrivacy {
    pub fn new(roll_mode: RollMode, gm_users: Vec<UserId>) -> Self {
        Self {
            roll_mode: RwLock::new(roll_mode),
            gm_users,
        }
    }

    /// Applies to records created from now on. Existing records keep the
    /// visibility they were created with.
    pub fn set_roll_mode(&self, mode: RollMode) {
        let mut guard = match self.roll_mode.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = mode;
        tracing::info!(roll_mode = %mode, "Roll mode changed");
    }
}

impl RollPrivacyPort for ConfiguredPrivacy {
    fn roll_mode(&self) -> RollMode {
        match self.roll_mode.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    fn privileged_recipients(&self) -> Vec<UserId> {
        self.gm_users.clone()
    }
}
