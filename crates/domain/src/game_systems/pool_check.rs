//! Pool check resolution.
//!
//! A check rolls attribute d10s plus fate d6s (five dice total) and counts
//! hits against botches. Key rules:
//! - A 1 on any die is a botch
//! - A 10 on an attribute die or a 6 on a fate die is always a hit
//! - Attribute dice also hit on the difficulty threshold or better
//! - Break turns the first botch of the check into a hit
//! - Push makes every attribute 10 worth two hits
//!
//! Resolution is pure: the same pool and configuration always produce the
//! same classified dice and tier.

use serde::{Deserialize, Serialize};

use crate::value_objects::{DieKind, Difficulty, RealizedPool, RolledDie};

/// Outcome tier of a check.
///
/// The discriminant of each named middle tier is the exact net score it
/// represents. The two dramatic tiers absorb every score beyond them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Score -2 or lower
    DramaticFailure = -2,
    SolidFailure = -1,
    AlmostHadIt = 0,
    JustBarely = 1,
    SolidSuccess = 2,
    /// Score 3 or higher
    DramaticSuccess = 3,
}

impl Tier {
    /// Map a net score (hits - botches) to its tier. Total over all scores.
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s < Tier::SolidFailure.score() => Tier::DramaticFailure,
            -1 => Tier::SolidFailure,
            0 => Tier::AlmostHadIt,
            1 => Tier::JustBarely,
            2 => Tier::SolidSuccess,
            _ => Tier::DramaticSuccess,
        }
    }

    /// Declared score of this tier.
    pub fn score(self) -> i32 {
        self as i32
    }

    pub fn is_success(self) -> bool {
        self >= Tier::JustBarely
    }

    /// Stable key used for label lookups and the wire format.
    pub fn key(self) -> &'static str {
        match self {
            Tier::DramaticFailure => "dramatic_failure",
            Tier::SolidFailure => "solid_failure",
            Tier::AlmostHadIt => "almost_had_it",
            Tier::JustBarely => "just_barely",
            Tier::SolidSuccess => "solid_success",
            Tier::DramaticSuccess => "dramatic_success",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Base classification of a single die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DieTag {
    None,
    Hit,
    Botch,
}

/// A die after classification and the modifier pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedDie {
    pub kind: DieKind,
    pub face: u8,
    pub tag: DieTag,
    /// This die was a botch turned into a hit by break
    pub broken: bool,
    /// This attribute 10 counts double thanks to push
    pub pushed: bool,
}

impl ClassifiedDie {
    /// Hits this die adds to the total.
    pub fn hits(&self) -> u32 {
        if self.pushed {
            2
        } else if self.tag == DieTag::Hit {
            1
        } else {
            0
        }
    }

    /// Botches this die adds to the total.
    pub fn botches(&self) -> u32 {
        if !self.pushed && self.tag == DieTag::Botch {
            1
        } else {
            0
        }
    }
}

/// Result of resolving a realized pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    /// Dice in resolution order: attribute dice, then fate dice
    pub dice: Vec<ClassifiedDie>,
    pub hits: u32,
    pub botches: u32,
    pub score: i32,
    pub tier: Tier,
}

impl Resolution {
    pub fn broken_die(&self) -> Option<&ClassifiedDie> {
        self.dice.iter().find(|d| d.broken)
    }

    pub fn pushed_count(&self) -> usize {
        self.dice.iter().filter(|d| d.pushed).count()
    }
}

/// Classify one die on its face alone.
pub fn classify(die: RolledDie, difficulty: Difficulty) -> DieTag {
    if die.face == 1 {
        DieTag::Botch
    } else if die.face == die.kind.max_face() {
        DieTag::Hit
    } else if die.kind.is_attribute() && die.face >= difficulty.threshold() {
        DieTag::Hit
    } else {
        DieTag::None
    }
}

/// Resolve a realized pool into classified dice and a tier.
pub fn resolve(
    pool: &RealizedPool,
    difficulty: Difficulty,
    skill_break: bool,
    skill_push: bool,
) -> Resolution {
    let (dice, _break_used) = pool.dice().fold(
        (Vec::with_capacity(pool.len()), false),
        |(mut dice, break_used), die| {
            let tag = classify(die, difficulty);
            let mut classified = ClassifiedDie {
                kind: die.kind,
                face: die.face,
                tag,
                broken: false,
                pushed: false,
            };

            let breaks = tag == DieTag::Botch && skill_break && !break_used;
            if breaks {
                classified.tag = DieTag::Hit;
                classified.broken = true;
            } else if skill_push && die.kind.is_attribute() && die.face == die.kind.max_face() {
                classified.pushed = true;
            }

            dice.push(classified);
            (dice, break_used || breaks)
        },
    );

    let hits = dice
        .iter()
        .map(ClassifiedDie::hits)
        .fold(0u32, u32::saturating_add);
    let botches = dice
        .iter()
        .map(ClassifiedDie::botches)
        .fold(0u32, u32::saturating_add);
    let score = net_score(hits, botches);

    Resolution {
        dice,
        hits,
        botches,
        score,
        tier: Tier::from_score(score),
    }
}

/// `hits - botches`, saturating at the `i32` bounds.
fn net_score(hits: u32, botches: u32) -> i32 {
    let net = i64::from(hits) - i64::from(botches);
    i32::try_from(net).unwrap_or(if net > 0 { i32::MAX } else { i32::MIN })
}
