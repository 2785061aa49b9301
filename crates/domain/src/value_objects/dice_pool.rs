//! Dice pool value objects.
//!
//! A check always rolls a pool of five dice split into two sub-pools:
//! attribute d10s (one per attribute rating point) and fate d6s that fill
//! the pool up to five. Both sub-pools come from a single roll event.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Number of dice in a standard pool.
pub const POOL_SIZE: u32 = 5;

/// Largest attribute sub-pool a single check may roll.
pub const MAX_ATTRIBUTE_DICE: u32 = 20;

/// Kind of die in a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DieKind {
    /// d10 drawn per attribute point
    Attribute,
    /// d6 filling the pool up to five dice
    Fate,
}

impl DieKind {
    /// Number of faces (and the highest face).
    pub fn sides(self) -> u8 {
        match self {
            DieKind::Attribute => 10,
            DieKind::Fate => 6,
        }
    }

    /// Face that always counts as a hit.
    pub fn max_face(self) -> u8 {
        self.sides()
    }

    pub fn is_attribute(self) -> bool {
        matches!(self, DieKind::Attribute)
    }
}

impl fmt::Display for DieKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// Fate dice needed to fill a pool with this many attribute dice.
pub fn fate_die_count(attribute_die_count: u32) -> u32 {
    POOL_SIZE.saturating_sub(attribute_die_count)
}

/// A single face of a realized pool, tagged with its die kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolledDie {
    pub kind: DieKind,
    pub face: u8,
}

/// Request for the dice service: two named sub-pools of one compound roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolExpression {
    pub attribute_dice: u32,
    pub fate_dice: u32,
}

impl PoolExpression {
    pub fn new(attribute_dice: u32) -> Self {
        Self {
            attribute_dice,
            fate_dice: fate_die_count(attribute_dice),
        }
    }

    pub fn total_dice(&self) -> u32 {
        self.attribute_dice + self.fate_dice
    }
}

impl fmt::Display for PoolExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}{},{}{}}}",
            self.attribute_dice,
            DieKind::Attribute,
            self.fate_dice,
            DieKind::Fate
        )
    }
}

/// Faces produced by the dice service, in the order it returned them.
///
/// Immutable once realized: revising a check re-reads these faces and never
/// rolls again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealizedPool {
    attribute_faces: Vec<u8>,
    fate_faces: Vec<u8>,
}

impl RealizedPool {
    /// Build a pool, rejecting faces outside their die's range.
    pub fn new(attribute_faces: Vec<u8>, fate_faces: Vec<u8>) -> Result<Self, DomainError> {
        check_faces(DieKind::Attribute, &attribute_faces)?;
        check_faces(DieKind::Fate, &fate_faces)?;
        Ok(Self {
            attribute_faces,
            fate_faces,
        })
    }

    pub fn attribute_faces(&self) -> &[u8] {
        &self.attribute_faces
    }

    pub fn fate_faces(&self) -> &[u8] {
        &self.fate_faces
    }

    pub fn len(&self) -> usize {
        self.attribute_faces.len() + self.fate_faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the sub-pool sizes match what was requested.
    pub fn matches(&self, expression: &PoolExpression) -> bool {
        self.attribute_faces.len() == expression.attribute_dice as usize
            && self.fate_faces.len() == expression.fate_dice as usize
    }

    /// All dice, attribute sub-pool first, each in realized order.
    pub fn dice(&self) -> impl Iterator<Item = RolledDie> + '_ {
        let attribute = self.attribute_faces.iter().map(|&face| RolledDie {
            kind: DieKind::Attribute,
            face,
        });
        let fate = self.fate_faces.iter().map(|&face| RolledDie {
            kind: DieKind::Fate,
            face,
        });
        attribute.chain(fate)
    }
}

fn check_faces(kind: DieKind, faces: &[u8]) -> Result<(), DomainError> {
    match faces.iter().find(|&&face| face == 0 || face > kind.sides()) {
        Some(face) => Err(DomainError::validation(format!(
            "{} face out of range: {}",
            kind, face
        ))),
        None => Ok(()),
    }
}
