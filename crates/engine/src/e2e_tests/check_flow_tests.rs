//! Check flow E2E tests.
//!
//! These tests exercise the whole check lifecycle:
//! - Performing a check and storing the record
//! - Revising the stored dice through the lower/raise controls
//! - Privacy of new records
//! - Records the engine can't revise

use chrono::Utc;
use poolcheck_domain::{CheckRecordId, Difficulty, RollMode, UserId, Visibility};
use poolcheck_shared::{CheckAction, ClientMessage, ServerMessage};

use super::E2ETestContext;
use crate::infrastructure::ports::{CheckRecord, RecordFlags};

// =============================================================================
// Performing checks
// =============================================================================

#[tokio::test]
async fn check_is_rolled_resolved_and_recorded() {
    let ctx = E2ETestContext::setup([10, 1, 7, 6, 3]);

    let (record_id, reply) = ctx.perform(3, "challenging", false, false).await;

    let ServerMessage::CheckRecorded {
        content,
        tier,
        score,
        whisper,
        blind,
        ..
    } = reply
    else {
        panic!("expected CheckRecorded");
    };
    assert_eq!(tier, "solid_success");
    assert_eq!(score, 2);
    assert!(whisper.is_empty());
    assert!(!blind);
    assert!(content.contains("Strength + Athletics"));
    assert!(content.contains("Solid Success"));

    let record = ctx.record(&record_id).await;
    assert_eq!(record.content, content);
    assert_eq!(record.author, ctx.roller);
    let pool = record.realized_pool.expect("dice stored");
    assert_eq!(pool.attribute_faces(), [10, 1, 7]);
    assert_eq!(pool.fate_faces(), [6, 3]);

    let configuration = ctx.configuration(&record_id).await;
    assert_eq!(configuration.attribute_die_count, 3);
    assert_eq!(configuration.difficulty, Difficulty::Challenging);
    assert_eq!(configuration.attribute_name, "str");
    assert_eq!(ctx.store.len(), 1);
}

#[tokio::test]
async fn break_turns_the_first_botch_into_a_hit() {
    let ctx = E2ETestContext::setup([10, 1, 7, 6, 3]);

    let (_, reply) = ctx.perform(3, "challenging", true, false).await;

    assert!(matches!(
        reply,
        ServerMessage::CheckRecorded { ref tier, score: 4, .. } if tier == "dramatic_success"
    ));
}

#[tokio::test]
async fn push_doubles_attribute_tens() {
    let ctx = E2ETestContext::setup([10, 10, 2, 2, 2]);

    let (_, reply) = ctx.perform(2, "tough", false, true).await;

    assert!(matches!(reply, ServerMessage::CheckRecorded { score: 4, .. }));
}

#[tokio::test]
async fn negative_rating_rolls_only_fate_dice() {
    let ctx = E2ETestContext::setup([2, 3, 4, 5, 6]);

    let (record_id, reply) = ctx.perform(-3, "trivial", false, false).await;

    assert!(matches!(reply, ServerMessage::CheckRecorded { score: 1, .. }));
    let pool = ctx.record(&record_id).await.realized_pool.expect("dice stored");
    assert!(pool.attribute_faces().is_empty());
    assert_eq!(pool.fate_faces(), [2, 3, 4, 5, 6]);
    assert_eq!(ctx.configuration(&record_id).await.attribute_die_count, 0);
}

// =============================================================================
// Revising checks
// =============================================================================

#[tokio::test]
async fn raising_re_resolves_the_stored_dice() {
    let ctx = E2ETestContext::setup([10, 1, 7, 6, 3]);
    let (record_id, _) = ctx.perform(3, "challenging", false, false).await;
    let original = ctx.record(&record_id).await;

    let reply = ctx
        .send(ClientMessage::for_action(
            CheckAction::RaiseDifficulty,
            record_id.clone(),
        ))
        .await;

    let ServerMessage::CheckRevised {
        content,
        tier,
        score,
        ..
    } = reply
    else {
        panic!("expected CheckRevised");
    };
    assert_eq!(tier, "just_barely");
    assert_eq!(score, 1);

    let revised = ctx.record(&record_id).await;
    assert_eq!(revised.content, content);
    assert_ne!(revised.content, original.content);
    assert_eq!(revised.realized_pool, original.realized_pool);
    assert_eq!(
        ctx.configuration(&record_id).await.difficulty,
        Difficulty::Tough
    );
    assert_eq!(ctx.store.len(), 1);
}

#[tokio::test]
async fn raising_past_tough_changes_nothing() {
    let ctx = E2ETestContext::setup([10, 1, 7, 6, 3]);
    let (record_id, _) = ctx.perform(3, "tough", false, false).await;
    let before = ctx.record(&record_id).await;

    let reply = ctx
        .send(ClientMessage::RaiseDifficulty {
            record_id: record_id.clone(),
        })
        .await;

    assert_eq!(
        reply,
        ServerMessage::CheckUnchanged {
            record_id: record_id.clone()
        }
    );
    assert_eq!(ctx.record(&record_id).await, before);
}

#[tokio::test]
async fn lowering_walks_down_to_trivial_then_stops() {
    let ctx = E2ETestContext::setup([6, 5, 2, 2, 2]);
    let (record_id, reply) = ctx.perform(2, "tough", false, false).await;
    assert!(matches!(reply, ServerMessage::CheckRecorded { score: 0, .. }));

    let mut scores = Vec::new();
    for _ in 0..3 {
        let reply = ctx
            .send(ClientMessage::LowerDifficulty {
                record_id: record_id.clone(),
            })
            .await;
        scores.push(match reply {
            ServerMessage::CheckRevised { score, .. } => Some(score),
            ServerMessage::CheckUnchanged { .. } => None,
            other => panic!("unexpected reply {:?}", other),
        });
    }

    assert_eq!(scores, vec![Some(0), Some(2), None]);
    assert_eq!(
        ctx.configuration(&record_id).await.difficulty,
        Difficulty::Trivial
    );
}

#[tokio::test]
async fn controls_disable_at_the_scale_ends() {
    let ctx = E2ETestContext::setup([5, 5, 5, 5, 5]);
    let (record_id, _) = ctx.perform(1, "challenging", false, false).await;

    ctx.send(ClientMessage::RaiseDifficulty {
        record_id: record_id.clone(),
    })
    .await;

    let content = ctx.record(&record_id).await.content;
    assert!(content.contains(r#"data-action="raise-difficulty" disabled"#));
    assert!(!content.contains(r#"data-action="lower-difficulty" disabled"#));
}

#[tokio::test]
async fn host_records_without_check_data_are_skipped() {
    let ctx = E2ETestContext::setup(Vec::<i32>::new());
    let id = CheckRecordId::new();
    let now = Utc::now();
    ctx.store.insert(CheckRecord {
        id,
        author: UserId::new(),
        content: "Just chatting".to_string(),
        flags: RecordFlags::new(),
        realized_pool: None,
        visibility: Visibility::public(),
        created_at: now,
        updated_at: now,
    });

    let reply = ctx
        .send(ClientMessage::LowerDifficulty {
            record_id: id.to_string(),
        })
        .await;

    assert_eq!(
        reply,
        ServerMessage::CheckSkipped {
            record_id: id.to_string()
        }
    );
    assert_eq!(ctx.record(&id.to_string()).await.content, "Just chatting");
}

// =============================================================================
// Privacy
// =============================================================================

#[tokio::test]
async fn blind_rolls_whisper_the_gms() {
    let gm = UserId::new();
    let ctx = E2ETestContext::setup_with_privacy([4, 4, 4, 4, 4], RollMode::Blind, vec![gm]);

    let (record_id, reply) = ctx.perform(3, "challenging", false, false).await;

    assert!(matches!(
        reply,
        ServerMessage::CheckRecorded { ref whisper, blind: true, .. } if *whisper == vec![gm.to_uuid()]
    ));
    let visibility = ctx.record(&record_id).await.visibility;
    assert_eq!(visibility.whisper, vec![gm]);
    assert!(visibility.blind);
}

#[tokio::test]
async fn roll_mode_changes_apply_to_new_records_only() {
    let ctx = E2ETestContext::setup([4, 4, 4, 4, 4, 4, 4, 4, 4, 4]);
    let (first, _) = ctx.perform(3, "challenging", false, false).await;

    ctx.send(ClientMessage::SetRollMode {
        mode: "self".to_string(),
    })
    .await;
    let (second, _) = ctx.perform(3, "challenging", false, false).await;

    assert!(ctx.record(&first).await.visibility.is_public());
    assert_eq!(
        ctx.record(&second).await.visibility.whisper,
        vec![ctx.roller]
    );
}
