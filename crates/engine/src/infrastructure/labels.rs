//! Built-in label catalog.

use std::collections::HashMap;

use poolcheck_domain::{Difficulty, Tier};

use crate::infrastructure::ports::LabelPort;

/// Prefix shared by every label key the engine asks for.
pub const LABEL_PREFIX: &str = "POOLCHECK";

pub fn attribute_key(name: &str) -> String {
    format!("{LABEL_PREFIX}.Attribute.{name}")
}

pub fn skill_key(name: &str) -> String {
    format!("{LABEL_PREFIX}.Skill.{name}")
}

pub fn difficulty_key(difficulty: Difficulty) -> String {
    format!("{LABEL_PREFIX}.Difficulty.{}", difficulty.key())
}

pub fn outcome_key(tier: Tier) -> String {
    format!("{LABEL_PREFIX}.Outcome.{}", tier.key())
}

pub fn outcome_description_key(tier: Tier) -> String {
    format!("{LABEL_PREFIX}.OutcomeDescription.{}", tier.key())
}

/// English labels for the fixed vocabulary, plus whatever the host registers.
///
/// Keys with no entry translate to their last segment, humanized
/// (`POOLCHECK.Skill.close_combat` becomes `Close combat`).
pub struct LabelCatalog {
    labels: HashMap<String, String>,
}

impl LabelCatalog {
    pub fn new() -> Self {
        let mut labels = HashMap::new();

        for (difficulty, label) in [
            (Difficulty::Trivial, "Trivial"),
            (Difficulty::Challenging, "Challenging"),
            (Difficulty::Tough, "Tough"),
        ] {
            labels.insert(difficulty_key(difficulty), label.to_string());
        }

        for (tier, label, description) in [
            (
                Tier::DramaticFailure,
                "Dramatic Failure",
                "Things go badly wrong, and then some.",
            ),
            (
                Tier::SolidFailure,
                "Solid Failure",
                "You fail, with a complication.",
            ),
            (
                Tier::AlmostHadIt,
                "Almost Had It",
                "Not quite. Something holds you back.",
            ),
            (
                Tier::JustBarely,
                "Just Barely",
                "You succeed, but at a cost.",
            ),
            (
                Tier::SolidSuccess,
                "Solid Success",
                "You do what you set out to do.",
            ),
            (
                Tier::DramaticSuccess,
                "Dramatic Success",
                "You succeed beyond what you hoped for.",
            ),
        ] {
            labels.insert(outcome_key(tier), label.to_string());
            labels.insert(outcome_description_key(tier), description.to_string());
        }

        Self { labels }
    }

    /// Register or replace a label.
    pub fn with_label(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(key.into(), label.into());
        self
    }
}

impl Default for LabelCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelPort for LabelCatalog {
    fn translate(&self, key: &str) -> String {
        match self.labels.get(key) {
            Some(label) => label.clone(),
            None => humanize(key.rsplit('.').next().unwrap_or(key)),
        }
    }
}

fn humanize(segment: &str) -> String {
    let spaced = segment.replace(['_', '-'], " ");
    let mut chars = spaced.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
