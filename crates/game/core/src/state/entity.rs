use super::{EntityId, Vec3};

/// Entity categories relevant to explosion prediction.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EntityKind {
    EndCrystal,
    Creeper,
    ChargedCreeper,
    Tnt,
    TntMinecart,
    /// Players, animals, items, projectiles: anything that cannot detonate.
    #[default]
    Other,
}

impl EntityKind {
    /// Explosive power if this entity detonated right now.
    pub const fn explosion_power(self) -> Option<f32> {
        match self {
            EntityKind::EndCrystal => Some(6.0),
            EntityKind::Creeper => Some(3.0),
            EntityKind::ChargedCreeper => Some(6.0),
            EntityKind::Tnt | EntityKind::TntMinecart => Some(4.0),
            EntityKind::Other => None,
        }
    }
}

/// A loaded entity as reported by the host for the current evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitySnapshot {
    pub id: EntityId,
    pub kind: EntityKind,
    pub position: Vec3,
}

impl EntitySnapshot {
    pub const fn new(id: EntityId, kind: EntityKind, position: Vec3) -> Self {
        Self { id, kind, position }
    }
}
