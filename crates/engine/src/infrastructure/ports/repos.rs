//! Record store port trait.

use async_trait::async_trait;
use poolcheck_domain::CheckRecordId;

use super::error::RepoError;
use super::types::{CheckRecord, NewCheckRecord, RecordFlags};

// =============================================================================
// Check Record Storage (the host's persisted message store)
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CheckRecordRepo: Send + Sync {
    async fn create(&self, record: &NewCheckRecord) -> Result<CheckRecordId, RepoError>;
    async fn get(&self, id: CheckRecordId) -> Result<Option<CheckRecord>, RepoError>;
    /// Replace the content and merge `flags` into the record's flags.
    async fn update(
        &self,
        id: CheckRecordId,
        content: &str,
        flags: &RecordFlags,
    ) -> Result<(), RepoError>;
    async fn get_flag(
        &self,
        id: CheckRecordId,
        namespace: &str,
        key: &str,
    ) -> Result<Option<serde_json::Value>, RepoError>;
}
