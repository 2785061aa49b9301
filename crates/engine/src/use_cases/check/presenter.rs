//! Turns a resolution into the rendered check card.

use std::sync::Arc;

use poolcheck_domain::{PoolConfiguration, Resolution};

use crate::infrastructure::labels::{
    attribute_key, difficulty_key, outcome_description_key, outcome_key, skill_key,
};
use crate::infrastructure::ports::{
    CheckCard, DieView, LabelPort, RenderError, TemplatePort, CHECK_CARD_TEMPLATE,
};

pub struct CheckPresenter {
    labels: Arc<dyn LabelPort>,
    templates: Arc<dyn TemplatePort>,
}

impl CheckPresenter {
    pub fn new(labels: Arc<dyn LabelPort>, templates: Arc<dyn TemplatePort>) -> Self {
        Self { labels, templates }
    }

    /// Build the card data. Empty attribute or skill names produce empty
    /// labels rather than a lookup.
    pub fn card(&self, configuration: &PoolConfiguration, resolution: &Resolution) -> CheckCard {
        let difficulty = configuration.difficulty;
        CheckCard {
            attribute_label: self.label_for(&configuration.attribute_name, attribute_key),
            skill_label: self.label_for(&configuration.skill_name, skill_key),
            difficulty,
            difficulty_threshold: difficulty.threshold(),
            difficulty_label: self.labels.translate(&difficulty_key(difficulty)),
            outcome: resolution.tier,
            outcome_label: self.labels.translate(&outcome_key(resolution.tier)),
            outcome_description: self
                .labels
                .translate(&outcome_description_key(resolution.tier)),
            dice: resolution
                .dice
                .iter()
                .map(|die| DieView {
                    kind: die.kind,
                    sides: die.kind.sides(),
                    face: die.face,
                    tag: die.tag,
                    broken: die.broken,
                    pushed: die.pushed,
                })
                .collect(),
            hits: resolution.hits,
            botches: resolution.botches,
            score: resolution.score,
            skill_break: configuration.skill_break,
            skill_push: configuration.skill_push,
            can_lower: difficulty.can_lower(),
            can_raise: difficulty.can_raise(),
        }
    }

    /// Build and render the card.
    pub fn render(
        &self,
        configuration: &PoolConfiguration,
        resolution: &Resolution,
    ) -> Result<String, RenderError> {
        let card = self.card(configuration, resolution);
        let data =
            serde_json::to_value(&card).map_err(|e| RenderError::InvalidData(e.to_string()))?;
        self.templates.render(CHECK_CARD_TEMPLATE, &data)
    }

    fn label_for(&self, name: &str, key: fn(&str) -> String) -> String {
        if name.is_empty() {
            String::new()
        } else {
            self.labels.translate(&key(name))
        }
    }
}
