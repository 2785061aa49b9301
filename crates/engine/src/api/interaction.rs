//! Dispatch of host interactions to the check use cases.

use poolcheck_domain::{CheckRecordId, Difficulty, RollMode, UserId};
use poolcheck_shared::{CheckAction, ClientMessage, ErrorCode, ServerMessage};

use crate::api::error_sanitizer::{messages, sanitize_error, sanitize_repo_error};
use crate::app::App;
use crate::infrastructure::ports::RepoError;
use crate::use_cases::check::{CheckError, CheckRequest, Revision};

/// Handle one host message. Every failure becomes a [`ServerMessage::Error`].
pub async fn handle_message(app: &App, message: ClientMessage) -> ServerMessage {
    match message {
        ClientMessage::PerformCheck {
            attribute_dice,
            attribute,
            difficulty,
            skill,
            skill_break,
            skill_push,
            roller,
        } => {
            let difficulty = match difficulty.parse::<Difficulty>() {
                Ok(d) => d,
                Err(e) => {
                    tracing::warn!(error = %e, "Rejected check request");
                    return ServerMessage::error(ErrorCode::ValidationError, e.to_string());
                }
            };
            let request = CheckRequest {
                roller: UserId::from_uuid(roller),
                attribute_die_count: attribute_dice,
                attribute_name: attribute,
                difficulty,
                skill_name: skill,
                skill_break,
                skill_push,
            };
            handle_perform(app, request).await
        }
        ClientMessage::LowerDifficulty { record_id } => {
            handle_adjust(app, &record_id, CheckAction::LowerDifficulty).await
        }
        ClientMessage::RaiseDifficulty { record_id } => {
            handle_adjust(app, &record_id, CheckAction::RaiseDifficulty).await
        }
        ClientMessage::SetRollMode { mode } => match mode.parse::<RollMode>() {
            Ok(mode) => {
                app.privacy.set_roll_mode(mode);
                ServerMessage::RollModeChanged {
                    mode: mode.to_string(),
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Rejected roll mode change");
                ServerMessage::error(ErrorCode::ValidationError, e.to_string())
            }
        },
        ClientMessage::Unknown => {
            tracing::warn!("Received unknown message type");
            ServerMessage::error(ErrorCode::BadRequest, messages::UNKNOWN_MESSAGE)
        }
    }
}

async fn handle_perform(app: &App, request: CheckRequest) -> ServerMessage {
    match app.use_cases.check.perform.execute(request).await {
        Ok(result) => ServerMessage::CheckRecorded {
            record_id: result.record_id.to_string(),
            content: result.content,
            tier: result.resolution.tier.to_string(),
            score: result.resolution.score,
            whisper: result
                .visibility
                .whisper
                .iter()
                .map(|user| user.to_uuid())
                .collect(),
            blind: result.visibility.blind,
        },
        Err(e) => check_error_response(&e, "perform the check"),
    }
}

async fn handle_adjust(app: &App, record_id: &str, action: CheckAction) -> ServerMessage {
    let id = match record_id.parse::<CheckRecordId>() {
        Ok(id) => id,
        Err(_) => {
            tracing::warn!(record_id = record_id, action = %action, "Rejected malformed record id");
            return ServerMessage::error(ErrorCode::BadRequest, messages::INVALID_RECORD_ID);
        }
    };

    let adjust = &app.use_cases.check.adjust;
    let outcome = match action {
        CheckAction::LowerDifficulty => adjust.lower(id).await,
        CheckAction::RaiseDifficulty => adjust.raise(id).await,
    };

    match outcome {
        Ok(Revision::Applied(revised)) => ServerMessage::CheckRevised {
            record_id: id.to_string(),
            content: revised.content,
            tier: revised.resolution.tier.to_string(),
            score: revised.resolution.score,
        },
        Ok(Revision::Unchanged) => ServerMessage::CheckUnchanged {
            record_id: id.to_string(),
        },
        Ok(Revision::Skipped(_)) => ServerMessage::CheckSkipped {
            record_id: id.to_string(),
        },
        Err(e) => check_error_response(&e, "revise the check"),
    }
}

/// `operation` names what the caller was doing, e.g. "revise the check".
fn check_error_response(error: &CheckError, operation: &str) -> ServerMessage {
    match error {
        CheckError::Invalid(e) => {
            tracing::warn!(error = %e, "Rejected check request");
            ServerMessage::error(ErrorCode::ValidationError, e.to_string())
        }
        CheckError::Dice(e) => {
            sanitize_error(e, &format!("trying to {}", operation));
            ServerMessage::error(ErrorCode::ServiceUnavailable, messages::DICE_UNAVAILABLE)
        }
        CheckError::Repo(e @ RepoError::NotFound { .. }) => {
            ServerMessage::error(ErrorCode::NotFound, e.to_string())
        }
        CheckError::Repo(e) => {
            ServerMessage::error(ErrorCode::InternalError, sanitize_repo_error(e, operation))
        }
        CheckError::Render(e) => ServerMessage::error(
            ErrorCode::InternalError,
            sanitize_error(e, &format!("trying to {}", operation)),
        ),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::infrastructure::clock::{SystemClock, SystemRandom};
    use crate::infrastructure::config::EngineConfig;
    use crate::infrastructure::dice::RandomDice;
    use crate::infrastructure::labels::LabelCatalog;
    use crate::infrastructure::ports::{DiceError, MockCheckRecordRepo};
    use crate::infrastructure::privacy::ConfiguredPrivacy;
    use crate::infrastructure::templates::CheckCardRenderer;
    use poolcheck_domain::MAX_ATTRIBUTE_DICE;
    use uuid::Uuid;

    fn app() -> App {
        App::in_memory(&EngineConfig::default())
    }

    #[tokio::test]
    async fn unknown_difficulty_is_a_validation_error() {
        let reply = handle_message(
            &app(),
            ClientMessage::PerformCheck {
                attribute_dice: 3,
                attribute: String::new(),
                difficulty: "impossible".to_string(),
                skill: String::new(),
                skill_break: false,
                skill_push: false,
                roller: Uuid::new_v4(),
            },
        )
        .await;

        assert!(matches!(
            reply,
            ServerMessage::Error {
                code: ErrorCode::ValidationError,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn oversized_attribute_pool_is_a_validation_error() {
        let reply = handle_message(
            &app(),
            ClientMessage::PerformCheck {
                attribute_dice: i32::MAX,
                attribute: String::new(),
                difficulty: "tough".to_string(),
                skill: String::new(),
                skill_break: false,
                skill_push: false,
                roller: Uuid::new_v4(),
            },
        )
        .await;

        let ServerMessage::Error { code, message } = reply else {
            panic!("expected an error reply");
        };
        assert_eq!(code, ErrorCode::ValidationError);
        assert!(message.contains(&MAX_ATTRIBUTE_DICE.to_string()));
    }

    #[tokio::test]
    async fn store_failures_name_the_revision() {
        let mut repo = MockCheckRecordRepo::new();
        repo.expect_get()
            .returning(|_| Err(RepoError::database("get", "connection reset")));
        let app = App::new(
            Arc::new(repo),
            Arc::new(RandomDice::new(Arc::new(SystemRandom::new()))),
            Arc::new(LabelCatalog::new()),
            Arc::new(CheckCardRenderer::new()),
            Arc::new(ConfiguredPrivacy::new(RollMode::Public, Vec::new())),
            Arc::new(SystemClock::new()),
        );

        let reply = handle_message(
            &app,
            ClientMessage::RaiseDifficulty {
                record_id: CheckRecordId::new().to_string(),
            },
        )
        .await;
        assert_eq!(
            reply,
            ServerMessage::error(
                ErrorCode::InternalError,
                "Failed to revise the check - please try again"
            )
        );
    }

    #[tokio::test]
    async fn malformed_record_id_is_a_bad_request() {
        let reply = handle_message(
            &app(),
            ClientMessage::for_action(CheckAction::LowerDifficulty, "nope"),
        )
        .await;
        assert_eq!(
            reply,
            ServerMessage::error(ErrorCode::BadRequest, messages::INVALID_RECORD_ID)
        );
    }

    #[tokio::test]
    async fn unknown_record_is_skipped() {
        let record_id = CheckRecordId::new().to_string();
        let reply = handle_message(
            &app(),
            ClientMessage::RaiseDifficulty {
                record_id: record_id.clone(),
            },
        )
        .await;
        assert_eq!(reply, ServerMessage::CheckSkipped { record_id });
    }

    #[tokio::test]
    async fn roll_mode_switches_at_runtime() {
        let app = app();
        let reply = handle_message(
            &app,
            ClientMessage::SetRollMode {
                mode: "blindroll".to_string(),
            },
        )
        .await;

        assert_eq!(
            reply,
            ServerMessage::RollModeChanged {
                mode: "blind".to_string()
            }
        );
        assert_eq!(
            crate::infrastructure::ports::RollPrivacyPort::roll_mode(app.privacy.as_ref()),
            RollMode::Blind
        );
    }

    #[tokio::test]
    async fn unknown_messages_are_rejected() {
        let reply = handle_message(&app(), ClientMessage::Unknown).await;
        assert!(reply.is_error());
    }

    #[test]
    fn dice_failures_hide_service_details() {
        let reply = check_error_response(
            &CheckError::Dice(DiceError::RollFailed("socket closed at 10.0.0.3".to_string())),
            "perform the check",
        );
        assert_eq!(
            reply,
            ServerMessage::error(ErrorCode::ServiceUnavailable, messages::DICE_UNAVAILABLE)
        );
    }
}
