//! Error codes carried by failed responses.

use serde::{Deserialize, Serialize};

/// Error codes for failed requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // === Client Errors ===
    /// Request was malformed or invalid
    BadRequest,
    /// Requested resource not found
    NotFound,
    /// Request data failed validation
    ValidationError,

    // === Server Errors ===
    /// Internal error
    InternalError,
    /// Required service (dice, store, renderer) is unavailable
    ServiceUnavailable,

    /// Unknown variant for forward compatibility
    #[serde(other)]
    Unknown,
}
