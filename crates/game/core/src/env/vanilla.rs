//! Reference implementation of the game's damage formulas.
//!
//! Used by offline scenario evaluation and tests. A live client plugs the
//! engine's own functions in through [`PhysicsOracle`] instead.
//!
//! # Formulas
//!
//! ```text
//! explosion:
//!     d        = distance(actor, center) / range        (no damage if d > 1)
//!     impact   = (1 - d) * exposure                       (exposure = 1, worst case)
//!     raw      = floor((impact² + impact) / 2 * 7 * range + 1)
//!     scaled   = difficulty(raw)
//!     armored  = scaled * (1 - clamp(armor - scaled / (2 + toughness / 4), armor / 5, 20) / 25)
//!     final    = protection(resistance(armored))
//!
//! fall:
//!     raw      = ceil(fall_distance - 3)
//!     final    = protection(resistance(raw))               (armor does not apply)
//! ```

use crate::state::{ActorSnapshot, Difficulty};

use super::{Explosion, PhysicsOracle};

/// Fall distance absorbed without damage.
pub const SAFE_FALL_DISTANCE: f32 = 3.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VanillaPhysics {
    pub difficulty: Difficulty,
}

impl VanillaPhysics {
    pub const fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    fn scale_for_difficulty(&self, damage: f32) -> f32 {
        match self.difficulty {
            Difficulty::Peaceful => 0.0,
            Difficulty::Easy => (damage / 2.0 + 1.0).min(damage),
            Difficulty::Normal => damage,
            Difficulty::Hard => damage * 1.5,
        }
    }
}

/// Armor points the game ever counts.
pub const MAX_ARMOR: f32 = 30.0;

/// Damage left after armor points and toughness.
///
/// Armor outside `0..=MAX_ARMOR` is clamped and non-finite armor counts as none.
pub fn apply_armor(damage: f32, armor: f32, toughness: f32) -> f32 {
    let armor = if armor.is_finite() {
        armor.clamp(0.0, MAX_ARMOR)
    } else {
        0.0
    };
    let breaker = 2.0 + toughness.max(0.0) / 4.0;
    let effective = (armor - damage / breaker).max(armor * 0.2).min(20.0);
    damage * (1.0 - effective / 25.0)
}

/// Damage left after the resistance status effect.
pub fn apply_resistance(damage: f32, level: u8) -> f32 {
    if level == 0 {
        return damage;
    }
    let reduction = (level as f32 * 5.0).min(25.0);
    damage * (25.0 - reduction) / 25.0
}

/// Damage left after enchantment protection (factor capped at 20).
pub fn apply_protection(damage: f32, factor: u8) -> f32 {
    let factor = factor.min(20) as f32;
    damage * (1.0 - factor / 25.0)
}

impl PhysicsOracle for VanillaPhysics {
    fn explosion_damage(&self, actor: &ActorSnapshot, explosion: &Explosion) -> f32 {
        if explosion.range <= 0.0 {
            return 0.0;
        }

        let distance = actor.position.distance_to(explosion.center) as f32 / explosion.range;
        if distance > 1.0 {
            return 0.0;
        }

        let impact = 1.0 - distance;
        let raw = ((impact * impact + impact) / 2.0 * 7.0 * explosion.range + 1.0).floor();

        let resistances = &actor.resistances;
        let damage = self.scale_for_difficulty(raw);
        let damage = apply_armor(damage, resistances.armor, resistances.toughness);
        let damage = apply_resistance(damage, resistances.resistance_level);
        apply_protection(damage, resistances.blast_protection_factor).max(0.0)
    }

    fn fall_damage(&self, actor: &ActorSnapshot, fall_distance: f32) -> f32 {
        let raw = (fall_distance - SAFE_FALL_DISTANCE).ceil().max(0.0);
        let resistances = &actor.resistances;
        let damage = apply_resistance(raw, resistances.resistance_level);
        apply_protection(damage, resistances.fall_protection_factor).max(0.0)
    }
}
