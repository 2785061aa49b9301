//! Check difficulty tiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Difficulty of a check.
///
/// The discriminant is the face an attribute die must meet or exceed to
/// count as a hit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Hits on 5+
    Trivial = 5,
    /// Hits on 7+
    #[default]
    Challenging = 7,
    /// Hits on 9+
    Tough = 9,
}

impl Difficulty {
    /// Every tier, easiest first.
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Trivial,
        Difficulty::Challenging,
        Difficulty::Tough,
    ];

    /// Minimum attribute die face that counts as a hit.
    pub fn threshold(self) -> u8 {
        self as u8
    }

    /// Step one tier easier. Trivial stays Trivial.
    pub fn lower(self) -> Self {
        match self {
            Difficulty::Trivial => Difficulty::Trivial,
            Difficulty::Challenging => Difficulty::Trivial,
            Difficulty::Tough => Difficulty::Challenging,
        }
    }

    /// Step one tier harder. Tough stays Tough.
    pub fn raise(self) -> Self {
        match self {
            Difficulty::Trivial => Difficulty::Challenging,
            Difficulty::Challenging => Difficulty::Tough,
            Difficulty::Tough => Difficulty::Tough,
        }
    }

    pub fn can_lower(self) -> bool {
        self.lower() != self
    }

    pub fn can_raise(self) -> bool {
        self.raise() != self
    }

    /// Stable key used for label lookups and the wire format.
    pub fn key(self) -> &'static str {
        match self {
            Difficulty::Trivial => "trivial",
            Difficulty::Challenging => "challenging",
            Difficulty::Tough => "tough",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trivial" => Ok(Difficulty::Trivial),
            "challenging" => Ok(Difficulty::Challenging),
            "tough" => Ok(Difficulty::Tough),
            other => Err(DomainError::parse(format!("Unknown difficulty: {}", other))),
        }
    }
}
