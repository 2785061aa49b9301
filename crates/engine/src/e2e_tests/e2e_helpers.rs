//! Shared setup for end-to-end tests.

use std::sync::Arc;

use chrono::Utc;
use poolcheck_domain::{CheckRecordId, PoolConfiguration, RollMode, UserId};
use poolcheck_shared::{ClientMessage, ServerMessage};

use crate::api::handle_message;
use crate::app::App;
use crate::infrastructure::clock::{FixedClock, SequenceRandom};
use crate::infrastructure::dice::RandomDice;
use crate::infrastructure::labels::LabelCatalog;
use crate::infrastructure::ports::{CheckRecord, CheckRecordRepo, ClockPort};
use crate::infrastructure::privacy::ConfiguredPrivacy;
use crate::infrastructure::record_store::InMemoryCheckRecords;
use crate::infrastructure::templates::CheckCardRenderer;

/// A fully wired engine plus direct access to its store.
pub struct E2ETestContext {
    pub app: App,
    pub store: Arc<InMemoryCheckRecords>,
    pub roller: UserId,
}

impl E2ETestContext {
    /// Engine whose dice replay `faces` in order, attribute dice first.
    pub fn setup(faces: impl IntoIterator<Item = i32>) -> Self {
        Self::setup_with_privacy(faces, RollMode::Public, Vec::new())
    }

    pub fn setup_with_privacy(
        faces: impl IntoIterator<Item = i32>,
        roll_mode: RollMode,
        gm_users: Vec<UserId>,
    ) -> Self {
        let clock: Arc<dyn ClockPort> = Arc::new(FixedClock(Utc::now()));
        let store = Arc::new(InMemoryCheckRecords::new(clock.clone()));
        let app = App::new(
            store.clone(),
            Arc::new(RandomDice::new(Arc::new(SequenceRandom::new(faces)))),
            Arc::new(
                LabelCatalog::new()
                    .with_label("POOLCHECK.Attribute.str", "Strength")
                    .with_label("POOLCHECK.Skill.athletics", "Athletics"),
            ),
            Arc::new(CheckCardRenderer::new()),
            Arc::new(ConfiguredPrivacy::new(roll_mode, gm_users)),
            clock,
        );

        Self {
            app,
            store,
            roller: UserId::new(),
        }
    }

    pub async fn send(&self, message: ClientMessage) -> ServerMessage {
        handle_message(&self.app, message).await
    }

    /// Perform a check and return the new record's id.
    pub async fn perform(
        &self,
        attribute_dice: i32,
        difficulty: &str,
        skill_break: bool,
        skill_push: bool,
    ) -> (String, ServerMessage) {
        let reply = self
            .send(ClientMessage::PerformCheck {
                attribute_dice,
                attribute: "str".to_string(),
                difficulty: difficulty.to_string(),
                skill: "athletics".to_string(),
                skill_break,
                skill_push,
                roller: self.roller.to_uuid(),
            })
            .await;
        let record_id = match &reply {
            ServerMessage::CheckRecorded { record_id, .. } => record_id.clone(),
            other => panic!("expected CheckRecorded, got {:?}", other),
        };
        (record_id, reply)
    }

    pub async fn record(&self, record_id: &str) -> CheckRecord {
        let id: CheckRecordId = record_id.parse().expect("record id");
        self.store
            .get(id)
            .await
            .expect("store read")
            .expect("record exists")
    }

    pub async fn configuration(&self, record_id: &str) -> PoolConfiguration {
        let id: CheckRecordId = record_id.parse().expect("record id");
        self.app
            .entities
            .check_records
            .configuration(id)
            .await
            .expect("store read")
            .expect("configuration stored")
    }
}
