//! Pool configuration: the replayable input of a check.

use serde::{Deserialize, Serialize};

use super::dice_pool::{fate_die_count, PoolExpression, MAX_ATTRIBUTE_DICE};
use super::difficulty::Difficulty;
use crate::error::DomainError;

/// Input of a check, stored on the record so the check can be re-resolved.
///
/// The fate die count is derived from `attribute_die_count` and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolConfiguration {
    pub attribute_die_count: u32,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub attribute_name: String,
    #[serde(default)]
    pub skill_name: String,
    #[serde(default)]
    pub skill_break: bool,
    #[serde(default)]
    pub skill_push: bool,
}

impl PoolConfiguration {
    /// Create a configuration; die counts clamp to `0..=MAX_ATTRIBUTE_DICE`.
    pub fn new(attribute_die_count: i32, difficulty: Difficulty) -> Self {
        Self {
            attribute_die_count: u32::try_from(attribute_die_count)
                .unwrap_or(0)
                .min(MAX_ATTRIBUTE_DICE),
            difficulty,
            attribute_name: String::new(),
            skill_name: String::new(),
            skill_break: false,
            skill_push: false,
        }
    }

    /// Like [`PoolConfiguration::new`], but a count above
    /// [`MAX_ATTRIBUTE_DICE`] is rejected instead of clamped.
    pub fn checked(attribute_die_count: i32, difficulty: Difficulty) -> Result<Self, DomainError> {
        if let Ok(count) = u32::try_from(attribute_die_count) {
            if count > MAX_ATTRIBUTE_DICE {
                return Err(DomainError::validation(format!(
                    "A check rolls at most {} attribute dice, got {}",
                    MAX_ATTRIBUTE_DICE, count
                )));
            }
        }
        Ok(Self::new(attribute_die_count, difficulty))
    }

    pub fn with_attribute(mut self, name: impl Into<String>) -> Self {
        self.attribute_name = name.into();
        self
    }

    pub fn with_skill(mut self, name: impl Into<String>) -> Self {
        self.skill_name = name.into();
        self
    }

    pub fn with_break(mut self, skill_break: bool) -> Self {
        self.skill_break = skill_break;
        self
    }

    pub fn with_push(mut self, skill_push: bool) -> Self {
        self.skill_push = skill_push;
        self
    }

    pub fn fate_die_count(&self) -> u32 {
        fate_die_count(self.attribute_die_count)
    }

    /// What to ask the dice service for.
    pub fn pool_expression(&self) -> PoolExpression {
        PoolExpression::new(self.attribute_die_count)
    }

    /// Apply an override; set fields win.
    pub fn merged(&self, changes: &ConfigurationOverride) -> Self {
        Self {
            attribute_die_count: self.attribute_die_count,
            difficulty: changes.difficulty.unwrap_or(self.difficulty),
            attribute_name: changes
                .attribute_name
                .clone()
                .unwrap_or_else(|| self.attribute_name.clone()),
            skill_name: changes
                .skill_name
                .clone()
                .unwrap_or_else(|| self.skill_name.clone()),
            skill_break: changes.skill_break.unwrap_or(self.skill_break),
            skill_push: changes.skill_push.unwrap_or(self.skill_push),
        }
    }
}

/// Partial configuration applied when revising a resolved check.
///
/// The attribute die count is bound to the already-rolled dice, so it can't
/// be overridden.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_break: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_push: Option<bool>,
}

impl ConfigurationOverride {
    pub fn difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty: Some(difficulty),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
