//! Error sanitization for client-facing messages.
//!
//! Prevents leaking internal details (store errors, service responses) to
//! clients. The full error is logged server-side.

/// Log the full error, return a generic message for the client.
pub fn sanitize_error<E: std::fmt::Display>(error: &E, context: &str) -> String {
    tracing::error!(
        error = %error,
        context = context,
        "Internal error occurred"
    );

    format!("An error occurred while {}", context)
}

/// Sanitize a record store error.
pub fn sanitize_repo_error<E: std::fmt::Display>(error: &E, operation: &str) -> String {
    tracing::error!(
        error = %error,
        operation = operation,
        "Repository error"
    );

    format!("Failed to {} - please try again", operation)
}

/// Common error messages for client consumption.
pub mod messages {
    pub const DICE_UNAVAILABLE: &str = "The dice service could not roll this check";
    pub const INVALID_RECORD_ID: &str = "Invalid record ID format";
    pub const UNKNOWN_MESSAGE: &str = "Unknown message type";
}
