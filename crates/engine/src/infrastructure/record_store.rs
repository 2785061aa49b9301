//! In-memory check record store.
//!
//! Stands in for the host's persisted message store when the engine runs on
//! its own. Records live for the life of the process.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use poolcheck_domain::CheckRecordId;

use crate::infrastructure::ports::{
    CheckRecord, CheckRecordRepo, ClockPort, NewCheckRecord, RecordFlags, RepoError,
};

pub struct InMemoryCheckRecords {
    records: DashMap<CheckRecordId, CheckRecord>,
    clock: Arc<dyn ClockPort>,
}

impl InMemoryCheckRecords {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self {
            records: DashMap::new(),
            clock,
        }
    }

    /// Store a record as-is, e.g. one imported from the host.
    pub fn insert(&self, record: CheckRecord) {
        self.records.insert(record.id, record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl CheckRecordRepo for InMemoryCheckRecords {
    async fn create(&self, record: &NewCheckRecord) -> Result<CheckRecordId, RepoError> {
        let id = CheckRecordId::new();
        self.records.insert(id, CheckRecord::from_new(id, record));
        Ok(id)
    }

    async fn get(&self, id: CheckRecordId) -> Result<Option<CheckRecord>, RepoError> {
        Ok(self.records.get(&id).map(|entry| entry.value().clone()))
    }

    async fn update(
        &self,
        id: CheckRecordId,
        content: &str,
        flags: &RecordFlags,
    ) -> Result<(), RepoError> {
        let mut record = self
            .records
            .get_mut(&id)
            .ok_or_else(|| RepoError::not_found("CheckRecord", id))?;
        record.content = content.to_string();
        record.flags.merge(flags);
        record.updated_at = self.clock.now();
        Ok(())
    }

    async fn get_flag(
        &self,
        id: CheckRecordId,
        namespace: &str,
        key: &str,
    ) -> Result<Option<serde_json::Value>, RepoError> {
        Ok(self
            .records
            .get(&id)
            .and_then(|record| record.flags.get(namespace, key).cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use chrono::{Duration, Utc};
    use poolcheck_domain::{RealizedPool, UserId, Visibility};
    use serde_json::json;

    fn new_record(content: &str) -> NewCheckRecord {
        NewCheckRecord {
            author: UserId::new(),
            content: content.to_string(),
            flags: RecordFlags::new().with("poolcheck", "configuration", json!({"v": 1})),
            realized_pool: RealizedPool::new(vec![3], vec![4, 5, 6, 1]).unwrap(),
            visibility: Visibility::public(),
            created_at: Utc::now() - Duration::minutes(5),
        }
    }

    #[tokio::test]
    async fn create_then_get() {
        let store = InMemoryCheckRecords::new(Arc::new(FixedClock(Utc::now())));
        let id = store.create(&new_record("card")).await.unwrap();

        let record = store.get(id).await.unwrap().unwrap();
        assert_eq!(record.content, "card");
        assert!(record.realized_pool.is_some());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn update_replaces_content_and_merges_flags() {
        let now = Utc::now();
        let store = InMemoryCheckRecords::new(Arc::new(FixedClock(now)));
        let id = store.create(&new_record("old")).await.unwrap();

        store
            .update(
                id,
                "new",
                &RecordFlags::new().with("poolcheck", "configuration", json!({"v": 2})),
            )
            .await
            .unwrap();

        let record = store.get(id).await.unwrap().unwrap();
        assert_eq!(record.content, "new");
        assert_eq!(record.updated_at, now);
        assert_eq!(
            store.get_flag(id, "poolcheck", "configuration").await.unwrap(),
            Some(json!({"v": 2}))
        );
    }

    #[tokio::test]
    async fn update_of_missing_record_is_not_found() {
        let store = InMemoryCheckRecords::new(Arc::new(FixedClock(Utc::now())));
        let err = store
            .update(CheckRecordId::new(), "x", &RecordFlags::new())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn missing_flags_read_as_none() {
        let store = InMemoryCheckRecords::new(Arc::new(FixedClock(Utc::now())));
        let id = store.create(&new_record("card")).await.unwrap();

        assert_eq!(store.get_flag(id, "poolcheck", "other").await.unwrap(), None);
        assert_eq!(
            store
                .get_flag(CheckRecordId::new(), "poolcheck", "configuration")
                .await
                .unwrap(),
            None
        );
    }
}
