//! HTML rendering of check cards.

use std::fmt::Write;

use poolcheck_domain::{DieKind, DieTag};
use poolcheck_shared::CheckAction;

use crate::infrastructure::ports::{
    CheckCard, DieView, RenderError, TemplatePort, CHECK_CARD_TEMPLATE,
};

/// Renders the check card into the HTML fragment stored as record content.
///
/// The lower/raise controls carry a `data-action` attribute the host binds
/// click handlers to. A control is disabled when the difficulty is already at
/// that end of the scale.
#[derive(Debug, Default, Clone, Copy)]
pub struct CheckCardRenderer;

impl CheckCardRenderer {
    pub fn new() -> Self {
        Self
    }

    fn render_card(card: &CheckCard) -> String {
        let mut html = String::new();
        let outcome_class = if card.outcome.is_success() {
            "success"
        } else {
            "failure"
        };

        let _ = writeln!(html, r#"<div class="poolcheck-card">"#);
        let _ = writeln!(
            html,
            r#"  <header class="poolcheck-title">{}</header>"#,
            escape(&title(card))
        );
        let _ = writeln!(
            html,
            r#"  <div class="poolcheck-difficulty">{} ({}+)</div>"#,
            escape(&card.difficulty_label),
            card.difficulty_threshold
        );

        let modifiers = modifier_names(card);
        if !modifiers.is_empty() {
            let _ = writeln!(
                html,
                r#"  <div class="poolcheck-modifiers">{}</div>"#,
                escape(&modifiers.join(", "))
            );
        }

        let _ = writeln!(html, r#"  <ol class="poolcheck-dice">"#);
        for die in &card.dice {
            let _ = writeln!(
                html,
                r#"    <li class="{}">{}</li>"#,
                die_classes(die),
                die.face
            );
        }
        let _ = writeln!(html, "  </ol>");

        let _ = writeln!(
            html,
            r#"  <div class="poolcheck-tally">hits {} / botches {} / score {}</div>"#,
            card.hits, card.botches, card.score
        );
        let _ = writeln!(
            html,
            r#"  <div class="poolcheck-outcome {}" data-tier="{}">"#,
            outcome_class,
            card.outcome.key()
        );
        let _ = writeln!(
            html,
            "    <strong>{}</strong>",
            escape(&card.outcome_label)
        );
        let _ = writeln!(html, "    <p>{}</p>", escape(&card.outcome_description));
        let _ = writeln!(html, "  </div>");

        let _ = writeln!(html, r#"  <div class="poolcheck-controls">"#);
        let _ = writeln!(
            html,
            "    {}",
            control(CheckAction::LowerDifficulty, "Lower", card.can_lower)
        );
        let _ = writeln!(
            html,
            "    {}",
            control(CheckAction::RaiseDifficulty, "Raise", card.can_raise)
        );
        let _ = writeln!(html, "  </div>");
        html.push_str("</div>");
        html
    }
}

impl TemplatePort for CheckCardRenderer {
    fn render(&self, template_id: &str, data: &serde_json::Value) -> Result<String, RenderError> {
        if template_id != CHECK_CARD_TEMPLATE {
            return Err(RenderError::UnknownTemplate(template_id.to_string()));
        }
        let card: CheckCard = serde_json::from_value(data.clone())
            .map_err(|e| RenderError::InvalidData(e.to_string()))?;
        Ok(Self::render_card(&card))
    }
}

fn title(card: &CheckCard) -> String {
    match (card.attribute_label.is_empty(), card.skill_label.is_empty()) {
        (false, false) => format!("{} + {}", card.attribute_label, card.skill_label),
        (false, true) => card.attribute_label.clone(),
        (true, false) => card.skill_label.clone(),
        (true, true) => String::new(),
    }
}

fn modifier_names(card: &CheckCard) -> Vec<&'static str> {
    let mut names = Vec::new();
    if card.skill_break {
        names.push("Break");
    }
    if card.skill_push {
        names.push("Push");
    }
    names
}

fn die_classes(die: &DieView) -> String {
    let mut classes = vec![
        "die".to_string(),
        match die.kind {
            DieKind::Attribute => "attribute",
            DieKind::Fate => "fate",
        }
        .to_string(),
        format!("d{}", die.sides),
    ];
    match die.tag {
        DieTag::Hit => classes.push("hit".to_string()),
        DieTag::Botch => classes.push("botch".to_string()),
        DieTag::None => {}
    }
    if die.broken {
        classes.push("broken".to_string());
    }
    if die.pushed {
        classes.push("pushed".to_string());
    }
    classes.join(" ")
}

fn control(action: CheckAction, label: &str, enabled: bool) -> String {
    let disabled = if enabled { "" } else { " disabled" };
    format!(r#"<button type="button" data-action="{action}"{disabled}>{label}</button>"#)
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
