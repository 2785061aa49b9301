//! Pool Check Shared - types exchanged between the host glue and the engine
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and uuid
//! 2. **No business logic** - Pure data types and serialization
//! 3. **No domain IDs** - use raw `uuid::Uuid` and strings in messages

pub mod messages;
pub mod responses;

pub use messages::{CheckAction, ClientMessage, ServerMessage};
pub use responses::ErrorCode;
