use crate::config::ThreatConfig;
use crate::env::{PhysicsOracle, WorldOracle};
use crate::state::ActorSnapshot;

use super::DamageEstimate;
use super::trajectory::FallingTrajectory;

/// Number of ticks the fall is simulated ahead.
pub const FALL_PREDICTION_TICKS: u32 = 20;

/// Damage the actor takes on landing, if it lands within the prediction window
/// on a surface that does not cancel fall damage.
///
/// Only predicted while the fall-protection module is active, since that is
/// when the accumulated fall distance would otherwise be trusted blindly.
pub fn predicted_fall_damage(
    actor: &ActorSnapshot,
    config: &ThreatConfig,
    world: &(impl WorldOracle + ?Sized),
    physics: &(impl PhysicsOracle + ?Sized),
) -> DamageEstimate {
    let fall = &config.health.fall;
    if !config.companions.no_fall || !fall.enabled || actor.fall_distance <= 0.0 {
        return 0.0;
    }

    if fall.ignore_elytra && actor.is_gliding() {
        return 0.0;
    }

    let Some(collision) =
        FallingTrajectory::from_actor(actor).find_collision(world, FALL_PREDICTION_TICKS)
    else {
        return 0.0;
    };

    if world.block_state(collision.pos).kind.blocks_fall_damage() {
        return 0.0;
    }

    physics.fall_damage(actor, actor.fall_distance)
}
