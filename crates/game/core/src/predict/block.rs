use crate::config::HealthConfig;
use crate::env::{Explosion, PhysicsOracle, WorldOracle};
use crate::sphere::SpatialOffsetSet;
use crate::state::{ActorSnapshot, BlockKind, BlockPos};

use super::DamageEstimate;

/// Worst-case profile of a bed or respawn anchor detonating.
pub const BLOCK_EXPLOSION_POWER: f32 = 5.0;
pub const BLOCK_EXPLOSION_RANGE: f32 = 10.0;
pub const BLOCK_EXPLOSION_MAX_RESISTANCE: f32 = 100.0;

pub fn block_explosion(pos: BlockPos) -> Explosion {
    Explosion {
        center: pos.into(),
        power: BLOCK_EXPLOSION_POWER,
        range: BLOCK_EXPLOSION_RANGE,
        max_blast_resistance: BLOCK_EXPLOSION_MAX_RESISTANCE,
    }
}

/// Worst damage an explosive block within the scan sphere could deal.
///
/// Beds are only dangerous where they do not work as spawn points, charged
/// respawn anchors likewise. Zero when the predictor is disabled or the sphere
/// has not been computed yet.
pub fn max_block_explosion_damage(
    actor: &ActorSnapshot,
    config: &HealthConfig,
    world: &(impl WorldOracle + ?Sized),
    physics: &(impl PhysicsOracle + ?Sized),
    sphere: Option<&SpatialOffsetSet>,
) -> DamageEstimate {
    let Some(sphere) = sphere else {
        return 0.0;
    };
    if !config.predict_explosion_blocks {
        return 0.0;
    }

    let dimension = world.dimension();
    let origin = actor.block_pos();
    let damage_at = |pos: BlockPos| physics.explosion_damage(actor, &block_explosion(pos));

    let mut max_damage: DamageEstimate = 0.0;

    if !dimension.bed_works {
        max_damage = sphere
            .around(origin)
            .filter(|pos| world.block_state(*pos).kind == BlockKind::Bed)
            .map(damage_at)
            .fold(max_damage, f32::max);
    }

    if !dimension.respawn_anchor_works {
        max_damage = sphere
            .around(origin)
            .filter(|pos| world.block_state(*pos).is_charged_anchor())
            .map(damage_at)
            .fold(max_damage, f32::max);
    }

    max_damage
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{VanillaPhysics, WorldSnapshot};
    use crate::state::{BlockState, Dimension, Vec3};

    fn enabled() -> HealthConfig {
        HealthConfig {
            predict_explosion_blocks: true,
            ..HealthConfig::default()
        }
    }

    fn actor() -> ActorSnapshot {
        ActorSnapshot::new(Vec3::new(0.5, 64.0, 0.5))
    }

    #[test]
    fn unset_sphere_yields_zero_even_when_enabled() {
        let world = WorldSnapshot::new(Dimension::NETHER)
            .with_block(BlockPos::new(1, 64, 0), BlockKind::Bed);
        let damage = max_block_explosion_damage(
            &actor(),
            &enabled(),
            &world,
            &VanillaPhysics::default(),
            None,
        );
        assert_eq!(damage, 0.0);
    }

    #[test]
    fn bed_in_nether_is_dangerous() {
        let world = WorldSnapshot::new(Dimension::NETHER)
            .with_block(BlockPos::new(1, 64, 0), BlockKind::Bed);
        let sphere = SpatialOffsetSet::sphere(5.0);
        let physics = VanillaPhysics::default();

        let damage =
            max_block_explosion_damage(&actor(), &enabled(), &world, &physics, Some(&sphere));

        let expected =
            physics.explosion_damage(&actor(), &block_explosion(BlockPos::new(1, 64, 0)));
        assert!(damage > 0.0);
        assert_eq!(damage, expected);
    }

    #[test]
    fn bed_in_overworld_is_ignored() {
        let world = WorldSnapshot::new(Dimension::OVERWORLD)
            .with_block(BlockPos::new(1, 64, 0), BlockKind::Bed);
        let sphere = SpatialOffsetSet::sphere(5.0);
        let damage = max_block_explosion_damage(
            &actor(),
            &enabled(),
            &world,
            &VanillaPhysics::default(),
            Some(&sphere),
        );
        assert_eq!(damage, 0.0);
    }

    #[test]
    fn only_charged_anchors_count_in_overworld() {
        let sphere = SpatialOffsetSet::sphere(5.0);
        let physics = VanillaPhysics::default();

        let damage_with_anchor = |charges: u8| {
            let world = WorldSnapshot::new(Dimension::OVERWORLD)
                .with_block(BlockPos::new(0, 64, 2), BlockState::respawn_anchor(charges));
            max_block_explosion_damage(&actor(), &enabled(), &world, &physics, Some(&sphere))
        };

        assert_eq!(damage_with_anchor(0), 0.0);
        assert!(damage_with_anchor(2) > 0.0);
    }

    #[test]
    fn blocks_outside_the_sphere_are_not_scanned() {
        let world = WorldSnapshot::new(Dimension::END)
            .with_block(BlockPos::new(6, 64, 0), BlockKind::Bed);
        let sphere = SpatialOffsetSet::sphere(5.0);
        let damage = max_block_explosion_damage(
            &actor(),
            &enabled(),
            &world,
            &VanillaPhysics::default(),
            Some(&sphere),
        );
        assert_eq!(damage, 0.0);
    }

    #[test]
    fn disabled_predictor_returns_zero() {
        let world = WorldSnapshot::new(Dimension::END)
            .with_block(BlockPos::new(1, 64, 0), BlockKind::Bed);
        let sphere = SpatialOffsetSet::sphere(5.0);
        let damage = max_block_explosion_damage(
            &actor(),
            &HealthConfig::default(),
            &world,
            &VanillaPhysics::default(),
            Some(&sphere),
        );
        assert_eq!(damage, 0.0);
    }
}
