//! Game system mechanics.
//!
//! # Supported Systems
//!
//! - Pool checks: attribute d10s plus fate d6s, hits against botches (`pool_check`)

mod pool_check;

pub use pool_check::{classify, resolve, ClassifiedDie, DieTag, Resolution, Tier};
