//! Interaction message types between the host glue and the engine
//!
//! The host sends a [`ClientMessage`] for every user interaction (invoke a
//! check, click lower/raise on a rendered record, change the roll mode) and
//! gets one [`ServerMessage`] back.
//!
//! ## Versioning Policy
//!
//! - New variants can be added at the end (forward compatible)
//! - Renaming variants is a breaking change
//! - Unknown enum variants deserialize to `Unknown` variant for forward compatibility

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::responses::ErrorCode;

// =============================================================================
// Client Messages (Host → Engine)
// =============================================================================

/// Messages from the host glue to the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    /// Roll and record a new check
    PerformCheck {
        /// Attribute rating; negative values are treated as zero
        attribute_dice: i32,
        #[serde(default)]
        attribute: String,
        /// "trivial", "challenging" or "tough"
        difficulty: String,
        #[serde(default)]
        skill: String,
        #[serde(default)]
        skill_break: bool,
        #[serde(default)]
        skill_push: bool,
        /// User performing the check
        roller: Uuid,
    },
    /// "Lower" clicked on a rendered record
    LowerDifficulty { record_id: String },
    /// "Raise" clicked on a rendered record
    RaiseDifficulty { record_id: String },
    /// The host's roll privacy setting changed
    SetRollMode { mode: String },
    /// Unknown message type for forward compatibility
    #[serde(other)]
    Unknown,
}

impl ClientMessage {
    /// Build the message for a clicked record control.
    pub fn for_action(action: CheckAction, record_id: impl Into<String>) -> Self {
        let record_id = record_id.into();
        match action {
            CheckAction::LowerDifficulty => ClientMessage::LowerDifficulty { record_id },
            CheckAction::RaiseDifficulty => ClientMessage::RaiseDifficulty { record_id },
        }
    }
}

// =============================================================================
// Server Messages (Engine → Host)
// =============================================================================

/// Messages from the engine back to the host glue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerMessage {
    /// A new check record was created
    CheckRecorded {
        record_id: String,
        content: String,
        tier: String,
        score: i32,
        /// Empty means everyone sees the record
        #[serde(default)]
        whisper: Vec<Uuid>,
        #[serde(default)]
        blind: bool,
    },
    /// A record was re-resolved with a new configuration
    CheckRevised {
        record_id: String,
        content: String,
        tier: String,
        score: i32,
    },
    /// Difficulty was already at the requested end of the scale
    CheckUnchanged { record_id: String },
    /// The record can't be revised (missing, or no stored configuration or dice)
    CheckSkipped { record_id: String },
    /// New checks use this roll mode from now on
    RollModeChanged { mode: String },
    /// The request failed
    Error { code: ErrorCode, message: String },
    /// Unknown message type for forward compatibility
    #[serde(other)]
    Unknown,
}

impl ServerMessage {
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        ServerMessage::Error {
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ServerMessage::Error { .. })
    }
}

// =============================================================================
// Record Controls
// =============================================================================

/// Clickable controls rendered on a check record.
///
/// The string form is the `data-action` attribute the renderer writes and the
/// host glue reads back when binding click handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckAction {
    LowerDifficulty,
    RaiseDifficulty,
}

impl CheckAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckAction::LowerDifficulty => "lower-difficulty",
            CheckAction::RaiseDifficulty => "raise-difficulty",
        }
    }
}

impl fmt::Display for CheckAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perform_check_defaults_optional_fields() {
        let roller = Uuid::new_v4();
        let json = format!(
            r#"{{"type":"PerformCheck","attribute_dice":3,"difficulty":"tough","roller":"{}"}}"#,
            roller
        );
        let msg: ClientMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(
            msg,
            ClientMessage::PerformCheck {
                attribute_dice: 3,
                attribute: String::new(),
                difficulty: "tough".to_string(),
                skill: String::new(),
                skill_break: false,
                skill_push: false,
                roller,
            }
        );
    }

    #[test]
    fn unknown_client_message_is_tolerated() {
        let msg: ClientMessage = serde_json::from_str(r#"{"type":"DeleteEverything"}"#).unwrap();
        assert_eq!(msg, ClientMessage::Unknown);
    }

    #[test]
    fn server_messages_are_tagged() {
        let msg = ServerMessage::CheckUnchanged {
            record_id: "abc".to_string(),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "CheckUnchanged");
        assert_eq!(json["record_id"], "abc");
    }

    #[test]
    fn action_maps_to_client_message() {
        assert_eq!(
            ClientMessage::for_action(CheckAction::RaiseDifficulty, "r1"),
            ClientMessage::RaiseDifficulty {
                record_id: "r1".to_string()
            }
        );
    }
}
