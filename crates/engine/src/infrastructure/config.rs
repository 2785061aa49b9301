//! Engine configuration from the environment.
//!
//! - `POOLCHECK_ROLL_MODE`: `public` (default), `gm`, `blind` or `self`
//! - `POOLCHECK_GM_USERS`: comma separated user UUIDs that receive private rolls

use poolcheck_domain::{RollMode, UserId};

pub const ROLL_MODE_VAR: &str = "POOLCHECK_ROLL_MODE";
pub const GM_USERS_VAR: &str = "POOLCHECK_GM_USERS";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub roll_mode: RollMode,
    pub gm_users: Vec<UserId>,
}

impl EngineConfig {
    /// Read from process environment variables. Call after `dotenvy` has run.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read through an arbitrary lookup. Unparseable values are logged and
    /// replaced by defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let roll_mode = match lookup(ROLL_MODE_VAR) {
            Some(raw) if !raw.trim().is_empty() => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(value = %raw, error = %e, "Invalid {}, using public", ROLL_MODE_VAR);
                RollMode::Public
            }),
            _ => RollMode::Public,
        };

        let gm_users: Vec<UserId> = lookup(GM_USERS_VAR)
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|entry| !entry.is_empty())
                    .filter_map(|entry| match entry.parse::<UserId>() {
                        Ok(id) => Some(id),
                        Err(e) => {
                            tracing::warn!(value = %entry, error = %e, "Skipping invalid GM user id");
                            None
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        if roll_mode.needs_privileged() && gm_users.is_empty() {
            tracing::warn!(
                roll_mode = %roll_mode,
                "No valid {} for a private roll mode; private rolls go to the roller only",
                GM_USERS_VAR
            );
        }

        Self {
            roll_mode,
            gm_users,
        }
    }
}
