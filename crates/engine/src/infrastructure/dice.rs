//! Dice roller backed by a [`RandomPort`].

use std::sync::Arc;

use async_trait::async_trait;
use poolcheck_domain::{DieKind, PoolExpression, RealizedPool};

use crate::infrastructure::ports::{DicePort, DiceError, RandomPort};

/// Rolls every die of both sub-pools in one pass.
pub struct RandomDice {
    random: Arc<dyn RandomPort>,
}

impl RandomDice {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self { random }
    }

    fn roll(&self, kind: DieKind, count: u32) -> Result<Vec<u8>, DiceError> {
        (0..count)
            .map(|_| {
                let face = self.random.gen_range(1, i32::from(kind.sides()));
                u8::try_from(face)
                    .map_err(|_| DiceError::InvalidFace(format!("{} rolled {}", kind, face)))
            })
            .collect()
    }
}

#[async_trait]
impl DicePort for RandomDice {
    async fn realize(&self, expression: &PoolExpression) -> Result<RealizedPool, DiceError> {
        let attribute = self.roll(DieKind::Attribute, expression.attribute_dice)?;
        let fate = self.roll(DieKind::Fate, expression.fate_dice)?;

        tracing::debug!(
            expression = %expression,
            attribute = ?attribute,
            fate = ?fate,
            "Realized dice pool"
        );

        RealizedPool::new(attribute, fate).map_err(|e| DiceError::InvalidFace(e.to_string()))
    }
}
