//! Infrastructure implementations.
//!
//! Port traits plus the reference adapters the engine uses when it runs
//! without a host providing its own.

pub mod clock;
pub mod config;
pub mod dice;
pub mod labels;
pub mod ports;
pub mod privacy;
pub mod record_store;
pub mod templates;
