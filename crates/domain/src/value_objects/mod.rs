//! Value objects - Immutable objects defined by their attributes

mod dice_pool;
mod difficulty;
mod pool_configuration;
mod roll_mode;

// Dice pools
pub use dice_pool::{fate_die_count, DieKind, PoolExpression, RealizedPool, RolledDie, MAX_ATTRIBUTE_DICE, POOL_SIZE};

// Difficulty tiers
pub use difficulty::Difficulty;

// Replayable check input
pub use pool_configuration::{ConfigurationOverride, PoolConfiguration};

// Roll privacy
pub use roll_mode::{RollMode, Visibility};
