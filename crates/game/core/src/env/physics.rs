use crate::state::{ActorSnapshot, Vec3};

/// Parameters of a hypothetical explosion.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Explosion {
    pub center: Vec3,
    pub power: f32,
    /// Distance beyond which the explosion deals no damage.
    pub range: f32,
    /// Blocks above this resistance are treated as cover when the physics
    /// implementation computes exposure.
    pub max_blast_resistance: f32,
}

impl Explosion {
    /// Explosion with the game's default range of twice its power and no cover limit.
    pub fn new(center: Vec3, power: f32) -> Self {
        Self {
            center,
            power,
            range: power * 2.0,
            max_blast_resistance: f32::MAX,
        }
    }
}

/// Damage functions of the host engine.
///
/// The decision engine treats these as black boxes: given positions and
/// parameters they return the health the actor would lose after all
/// mitigation.
pub trait PhysicsOracle: Send + Sync {
    fn explosion_damage(&self, actor: &ActorSnapshot, explosion: &Explosion) -> f32;

    /// Damage applied when landing after falling `fall_distance` blocks.
    fn fall_damage(&self, actor: &ActorSnapshot, fall_distance: f32) -> f32;
}
