//! Helper types for port operations.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use poolcheck_domain::{
    CheckRecordId, DieKind, DieTag, Difficulty, RealizedPool, Tier, UserId, Visibility,
};
use serde::{Deserialize, Serialize};

// =============================================================================
// Record Types
// =============================================================================

/// Arbitrary metadata attached to a record, scoped by namespace then key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordFlags(BTreeMap<String, BTreeMap<String, serde_json::Value>>);

impl RecordFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, namespace: &str, key: &str, value: serde_json::Value) -> Self {
        self.set(namespace, key, value);
        self
    }

    pub fn set(&mut self, namespace: &str, key: &str, value: serde_json::Value) {
        self.0
            .entry(namespace.to_string())
            .or_default()
            .insert(key.to_string(), value);
    }

    pub fn get(&self, namespace: &str, key: &str) -> Option<&serde_json::Value> {
        self.0.get(namespace).and_then(|scope| scope.get(key))
    }

    /// Overwrite every key present in `other`, keep the rest.
    pub fn merge(&mut self, other: &RecordFlags) {
        for (namespace, scope) in &other.0 {
            for (key, value) in scope {
                self.set(namespace, key, value.clone());
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(BTreeMap::is_empty)
    }
}

/// A record about to be created.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCheckRecord {
    pub author: UserId,
    pub content: String,
    pub flags: RecordFlags,
    pub realized_pool: RealizedPool,
    pub visibility: Visibility,
    pub created_at: DateTime<Utc>,
}

/// A persisted record.
///
/// The store may hold records created elsewhere by the host, so the realized
/// pool is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckRecord {
    pub id: CheckRecordId,
    pub author: UserId,
    pub content: String,
    pub flags: RecordFlags,
    pub realized_pool: Option<RealizedPool>,
    pub visibility: Visibility,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CheckRecord {
    pub fn from_new(id: CheckRecordId, record: &NewCheckRecord) -> Self {
        Self {
            id,
            author: record.author,
            content: record.content.clone(),
            flags: record.flags.clone(),
            realized_pool: Some(record.realized_pool.clone()),
            visibility: record.visibility.clone(),
            created_at: record.created_at,
            updated_at: record.created_at,
        }
    }
}

// =============================================================================
// Check Card (template data bag)
// =============================================================================

/// Template id of the check card.
pub const CHECK_CARD_TEMPLATE: &str = "poolcheck/check-card";

/// Everything the check card template displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckCard {
    pub attribute_label: String,
    pub skill_label: String,
    pub difficulty: Difficulty,
    pub difficulty_threshold: u8,
    pub difficulty_label: String,
    pub outcome: Tier,
    pub outcome_label: String,
    pub outcome_description: String,
    pub dice: Vec<DieView>,
    pub hits: u32,
    pub botches: u32,
    pub score: i32,
    pub skill_break: bool,
    pub skill_push: bool,
    pub can_lower: bool,
    pub can_raise: bool,
}

/// One die as displayed on the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DieView {
    pub kind: DieKind,
    pub sides: u8,
    pub face: u8,
    pub tag: DieTag,
    pub broken: bool,
    pub pushed: bool,
}
