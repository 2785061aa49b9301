//! PoolCheck Engine library.
//!
//! Rolls dice-pool skill checks, records them, and revises recorded checks
//! in place when the difficulty or modifiers change.
//!
//! ## Structure
//!
//! - `entities/` - Entity modules wrapping record store operations
//! - `use_cases/` - Check orchestration across entities and ports
//! - `infrastructure/` - Port traits plus the reference adapters
//! - `api/` - Host interaction entry point
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod entities;
pub mod infrastructure;
pub mod use_cases;

/// End-to-end tests over the in-memory adapters.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
