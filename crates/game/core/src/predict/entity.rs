use crate::config::HealthConfig;
use crate::env::{Explosion, PhysicsOracle, WorldOracle};
use crate::state::{ActorSnapshot, EntitySnapshot};

use super::DamageEstimate;

/// Explosion an entity would cause if it detonated right now.
pub fn explosion_of(entity: &EntitySnapshot) -> Option<Explosion> {
    entity
        .kind
        .explosion_power()
        .map(|power| Explosion::new(entity.position, power))
}

/// Worst damage any loaded explosive entity could deal to the actor.
///
/// Zero when the predictor is disabled or nothing nearby can explode.
pub fn max_entity_explosion_damage(
    actor: &ActorSnapshot,
    config: &HealthConfig,
    world: &(impl WorldOracle + ?Sized),
    physics: &(impl PhysicsOracle + ?Sized),
) -> DamageEstimate {
    if !config.predict_explosion_entities {
        return 0.0;
    }

    world
        .entities()
        .iter()
        .filter_map(explosion_of)
        .map(|explosion| physics.explosion_damage(actor, &explosion))
        .fold(0.0, f32::max)
}
