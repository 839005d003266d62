//! Damage predictors.
//!
//! Each predictor is a pure function of one actor snapshot, the configuration
//! and the read-only oracles. They do not depend on each other and may run in
//! any order; every missing input degrades to an estimate of zero.
mod block;
mod entity;
mod fall;
mod trajectory;

pub use block::{
    BLOCK_EXPLOSION_MAX_RESISTANCE, BLOCK_EXPLOSION_POWER, BLOCK_EXPLOSION_RANGE, block_explosion,
    max_block_explosion_damage,
};
pub use entity::{explosion_of, max_entity_explosion_damage};
pub use fall::{FALL_PREDICTION_TICKS, predicted_fall_damage};
pub use trajectory::{Collision, FallingTrajectory, GRAVITY, HORIZONTAL_DRAG, VERTICAL_DRAG};

/// Maximum predicted damage from one source category; never negative.
pub type DamageEstimate = f32;
