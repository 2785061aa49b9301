//! Pool Check Domain - dice pool value objects and the check resolver.
//!
//! Everything in this crate is pure: no I/O, no randomness. Dice are
//! realized by the engine behind its `DicePort` and handed in here as
//! [`RealizedPool`].

pub mod error;
pub mod game_systems;
pub mod ids;
pub mod value_objects;

pub use error::DomainError;

// Re-export the resolver
pub use game_systems::{classify, resolve, ClassifiedDie, DieTag, Resolution, Tier};

// Re-export ID types
pub use ids::{CheckRecordId, UserId};

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    fate_die_count, ConfigurationOverride, DieKind, Difficulty, PoolConfiguration,
    PoolExpression, RealizedPool, RollMode, RolledDie, Visibility, MAX_ATTRIBUTE_DICE, POOL_SIZE,
};
