//! Roll privacy: who gets to see a check record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::ids::UserId;

/// Host roll privacy setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollMode {
    /// Everyone sees the record
    #[default]
    Public,
    /// Whispered to the GMs
    GmOnly,
    /// Whispered to the GMs, hidden from the roller
    Blind,
    /// Only the roller sees it
    SelfOnly,
}

impl RollMode {
    /// Decide a record's visibility. Computed once, when the record is created.
    ///
    /// Private and blind rolls with nobody privileged to receive them fall
    /// back to a self roll, so they never reach everyone.
    pub fn visibility(self, roller: UserId, privileged: &[UserId]) -> Visibility {
        match self {
            RollMode::Public => Visibility::public(),
            RollMode::GmOnly | RollMode::Blind if privileged.is_empty() => Visibility {
                whisper: vec![roller],
                blind: false,
            },
            RollMode::GmOnly => Visibility {
                whisper: privileged.to_vec(),
                blind: false,
            },
            RollMode::Blind => Visibility {
                whisper: privileged.to_vec(),
                blind: true,
            },
            RollMode::SelfOnly => Visibility {
                whisper: vec![roller],
                blind: false,
            },
        }
    }

    /// Whether this mode restricts records to privileged users.
    pub fn needs_privileged(self) -> bool {
        matches!(self, RollMode::GmOnly | RollMode::Blind)
    }
}

impl fmt::Display for RollMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RollMode::Public => "public",
            RollMode::GmOnly => "gm",
            RollMode::Blind => "blind",
            RollMode::SelfOnly => "self",
        };
        f.write_str(name)
    }
}

impl FromStr for RollMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "public" | "publicroll" => Ok(RollMode::Public),
            "gm" | "gmroll" | "private" => Ok(RollMode::GmOnly),
            "blind" | "blindroll" => Ok(RollMode::Blind),
            "self" | "selfroll" => Ok(RollMode::SelfOnly),
            other => Err(DomainError::parse(format!("Unknown roll mode: {}", other))),
        }
    }
}

/// Recipients of a record. An empty whisper list means everyone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visibility {
    #[serde(default)]
    pub whisper: Vec<UserId>,
    #[serde(default)]
    pub blind: bool,
}

impl Visibility {
    pub fn public() -> Self {
        Self::default()
    }

    pub fn is_public(&self) -> bool {
        self.whisper.is_empty() && !self.blind
    }
}
