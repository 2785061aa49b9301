//! API layer - interaction entry points.

pub mod error_sanitizer;
pub mod interaction;

pub use interaction::handle_message;
