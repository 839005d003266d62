use totem_core::{
    ActorSnapshot, ArmorSlot, Assessment, BlockKind, BlockPos, Companions, Dimension, EntityKind,
    Env, EquipPolicy, EvaluationContext, Explosion, ItemStack, PhysicsOracle, Reason, Shelter,
    SpatialOffsetSet, ThreatAssessor, ThreatConfig, Vec3, WorldSnapshot,
    should_equip_protective_item,
};

/// Physics stub returning fixed damage for every explosion and fall.
struct FixedDamage {
    explosion: f32,
    fall: f32,
}

impl FixedDamage {
    const NONE: Self = Self {
        explosion: 0.0,
        fall: 0.0,
    };
}

impl PhysicsOracle for FixedDamage {
    fn explosion_damage(&self, _actor: &ActorSnapshot, _explosion: &Explosion) -> f32 {
        self.explosion
    }

    fn fall_damage(&self, _actor: &ActorSnapshot, _fall_distance: f32) -> f32 {
        self.fall
    }
}

const FEET: BlockPos = BlockPos::new(0, 64, 0);

fn actor(health: f32) -> ActorSnapshot {
    ActorSnapshot::new(Vec3::new(0.5, 64.0, 0.5))
        .with_full_armor()
        .with_health(health)
}

fn open_field() -> WorldSnapshot {
    WorldSnapshot::default().with_floor(63, 4, BlockKind::Solid)
}

fn obsidian_hole() -> WorldSnapshot {
    let mut world = open_field().with_block(FEET.down(), BlockKind::Obsidian);
    for wall in FEET.horizontal_neighbors() {
        world.set_block(wall, BlockKind::Obsidian);
    }
    world
}

fn crystal_next_to_actor() -> WorldSnapshot {
    open_field().with_entity(EntityKind::EndCrystal, Vec3::new(2.5, 64.0, 0.5))
}

fn assess_with(
    config: ThreatConfig,
    actor: &ActorSnapshot,
    world: &WorldSnapshot,
    physics: &FixedDamage,
    sphere: Option<&SpatialOffsetSet>,
) -> Assessment {
    let env = Env::new(world, physics);
    ThreatAssessor::new(config).assess(&EvaluationContext::new(actor, env.as_totem_env(), sphere))
}

fn assess(config: ThreatConfig, actor: &ActorSnapshot, world: &WorldSnapshot) -> Assessment {
    assess_with(config, actor, world, &FixedDamage::NONE, None)
}

#[test]
fn healthy_actor_without_threats_keeps_offhand() {
    let assessment = assess(ThreatConfig::default(), &actor(20.0), &open_field());
    assert!(!assessment.verdict);
    assert_eq!(assessment.reason, Reason::AboveThreshold);
}

#[test]
fn health_below_threshold_equips() {
    let assessment = assess(ThreatConfig::default(), &actor(13.0), &open_field());
    assert!(assessment.verdict);
    assert_eq!(assessment.reason, Reason::BelowThreshold);
}

#[test]
fn every_health_at_or_below_threshold_equips() {
    for health in 1..=14 {
        let assessment = assess(ThreatConfig::default(), &actor(health as f32), &open_field());
        assert!(assessment.verdict, "health {health} should equip");
    }
}

#[test]
fn missing_armor_equips_at_full_health() {
    let actor = actor(20.0).with_armor(ArmorSlot::Chest, ItemStack::EMPTY);
    let assessment = assess(ThreatConfig::default(), &actor, &open_field());
    assert!(assessment.verdict);
    assert_eq!(assessment.reason, Reason::MissingArmor);
}

#[test]
fn missing_armor_overrides_safe_hole() {
    let actor = actor(20.0).with_armor(ArmorSlot::Feet, ItemStack::EMPTY);
    assert!(assess(ThreatConfig::default(), &actor, &obsidian_hole()).verdict);
}

#[test]
fn missing_armor_ignored_when_toggled_off() {
    let mut config = ThreatConfig::default();
    config.health.missing_armor = false;
    let actor = actor(20.0).with_armor(ArmorSlot::Head, ItemStack::EMPTY);
    assert!(!assess(config, &actor, &open_field()).verdict);
}

#[test]
fn lethal_fast_path_equips_above_threshold() {
    let mut config = ThreatConfig::default();
    config.health.subtract_calculated_damage = false;
    let physics = FixedDamage {
        explosion: 19.0,
        fall: 0.0,
    };

    let assessment = assess_with(config, &actor(19.0), &crystal_next_to_actor(), &physics, None);

    assert!(assessment.verdict);
    assert_eq!(assessment.reason, Reason::LethalDamage);
    assert_eq!(assessment.damage.map(|d| d.calculated()), Some(19.0));
}

#[test]
fn non_lethal_damage_without_subtraction_uses_threshold() {
    let mut config = ThreatConfig::default();
    config.health.subtract_calculated_damage = false;
    let physics = FixedDamage {
        explosion: 5.0,
        fall: 0.0,
    };

    let assessment = assess_with(config, &actor(19.0), &crystal_next_to_actor(), &physics, None);
    assert!(!assessment.verdict);
    assert_eq!(assessment.reason, Reason::AboveThreshold);
}

/// With subtraction enabled, predicted damage never reaches the threshold
/// comparison: a lethal explosion next to a healthy actor does not equip.
#[test]
fn subtract_mode_does_not_lower_health_before_threshold_comparison() {
    let config = ThreatConfig::default();
    assert!(config.health.subtract_calculated_damage);
    let physics = FixedDamage {
        explosion: 40.0,
        fall: 0.0,
    };

    let assessment = assess_with(config, &actor(15.0), &crystal_next_to_actor(), &physics, None);

    assert!(!assessment.verdict);
    assert_eq!(assessment.reason, Reason::AboveThreshold);
    assert_eq!(assessment.damage.map(|d| d.entities), Some(40.0));
}

#[test]
fn fall_damage_adds_to_worst_explosion() {
    let mut config = ThreatConfig::default();
    config.health.subtract_calculated_damage = false;
    config.companions = Companions { no_fall: true };
    let physics = FixedDamage {
        explosion: 10.0,
        fall: 8.0,
    };
    let actor = actor(18.0).falling(12.0, Vec3::new(0.0, -0.6, 0.0));
    // Shaft through the upper floor down to y = 60.
    let world = crystal_next_to_actor()
        .with_floor(60, 4, BlockKind::Solid)
        .with_block(BlockPos::new(0, 63, 0), BlockKind::Air);

    let assessment = assess_with(config, &actor, &world, &physics, None);

    assert!(assessment.verdict);
    assert_eq!(assessment.reason, Reason::LethalDamage);
    assert_eq!(assessment.damage.map(|d| d.calculated()), Some(18.0));
}

#[test]
fn safe_hole_suppresses_equip_below_threshold() {
    let assessment = assess(ThreatConfig::default(), &actor(12.0), &obsidian_hole());
    assert!(!assessment.verdict);
    assert_eq!(assessment.reason, Reason::Sheltered(Shelter::Hole));
}

#[test]
fn burrowed_actor_is_sheltered() {
    let world = open_field().with_block(FEET, BlockKind::Obsidian);
    let assessment = assess(ThreatConfig::default(), &actor(12.0), &world);
    assert_eq!(assessment.reason, Reason::Sheltered(Shelter::Burrowed));
}

#[test]
fn standing_on_ender_chest_still_equips_below_threshold() {
    let world = open_field().with_block(FEET, BlockKind::EnderChest);
    let on_top = ActorSnapshot::new(Vec3::new(0.5, 64.875, 0.5))
        .with_full_armor()
        .with_health(12.0);

    let assessment = assess(ThreatConfig::default(), &on_top, &world);
    assert!(assessment.verdict);
    assert_eq!(assessment.reason, Reason::BelowThreshold);
}

#[test]
fn safe_hole_stops_protecting_at_safe_health() {
    let assessment = assess(ThreatConfig::default(), &actor(10.0), &obsidian_hole());
    assert!(assessment.verdict);
    assert_eq!(assessment.reason, Reason::BelowThreshold);
}

#[test]
fn safe_hole_ignored_when_safety_disabled() {
    let mut config = ThreatConfig::default();
    config.health.safety.enabled = false;
    assert!(assess(config, &actor(12.0), &obsidian_hole()).verdict);
}

#[test]
fn lethal_fast_path_wins_over_safe_hole() {
    let mut config = ThreatConfig::default();
    config.health.subtract_calculated_damage = false;
    let physics = FixedDamage {
        explosion: 30.0,
        fall: 0.0,
    };
    let world = obsidian_hole().with_entity(EntityKind::EndCrystal, Vec3::new(0.5, 65.0, 2.5));

    let assessment = assess_with(config, &actor(20.0), &world, &physics, None);
    assert_eq!(assessment.reason, Reason::LethalDamage);
}

#[test]
fn block_prediction_is_zero_without_sphere() {
    let mut config = ThreatConfig::default();
    config.health.predict_explosion_blocks = true;
    let physics = FixedDamage {
        explosion: 25.0,
        fall: 0.0,
    };
    let world = WorldSnapshot::new(Dimension::NETHER)
        .with_floor(63, 4, BlockKind::Solid)
        .with_block(BlockPos::new(2, 64, 0), BlockKind::Bed);

    let without = assess_with(config, &actor(20.0), &world, &physics, None);
    assert_eq!(without.damage.map(|d| d.blocks), Some(0.0));

    let sphere = SpatialOffsetSet::sphere(5.0);
    let with = assess_with(config, &actor(20.0), &world, &physics, Some(&sphere));
    assert_eq!(with.damage.map(|d| d.blocks), Some(25.0));
}

#[test]
fn assessment_is_idempotent() {
    let mut config = ThreatConfig::default();
    config.health.subtract_calculated_damage = false;
    let physics = FixedDamage {
        explosion: 12.0,
        fall: 0.0,
    };
    let world = crystal_next_to_actor();
    let actor = actor(16.0);

    let first = assess_with(config, &actor, &world, &physics, None);
    let second = assess_with(config, &actor, &world, &physics, None);
    assert_eq!(first, second);
}

#[test]
fn one_shot_function_matches_policy() {
    let world = open_field();
    let physics = FixedDamage::NONE;
    let env = Env::new(&world, &physics);
    let config = ThreatConfig::default();

    assert!(should_equip_protective_item(&actor(13.0), &config, env.as_totem_env(), None));
    assert!(!should_equip_protective_item(&actor(20.0), &config, env.as_totem_env(), None));
}
