//! End-to-end tests over the in-memory adapters.
//!
//! These tests drive the engine through `handle_message` exactly as the host
//! glue does, with:
//! - The in-memory record store
//! - Dice replayed from a fixed face sequence
//! - The built-in label catalog and the HTML card renderer
//!
//! # Running
//!
//! ```bash
//! cargo test -p poolcheck-engine --lib e2e_tests
//! ```

mod check_flow_tests;
mod e2e_helpers;

pub use e2e_helpers::*;
