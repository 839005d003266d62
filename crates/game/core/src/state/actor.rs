//! Per-evaluation view of the controlled character.

use bitflags::bitflags;

use super::{BlockPos, ItemStack, Vec3};

bitflags! {
    /// Game-mode and movement flags sampled from the host engine.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ActorFlags: u8 {
        const CREATIVE    = 1 << 0;
        const SPECTATOR   = 1 << 1;
        const DEAD        = 1 << 2;
        /// Elytra gliding is active.
        const FALL_FLYING = 1 << 3;
        const ON_GROUND   = 1 << 4;
    }
}

/// Body pose reported by the engine.
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
pub enum Pose {
    #[default]
    Standing,
    Crouching,
    Swimming,
    FallFlying,
    Sleeping,
}

/// Armor slot order used by [`ActorSnapshot::armor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ArmorSlot {
    Head,
    Chest,
    Legs,
    Feet,
}

impl ArmorSlot {
    pub const ALL: [ArmorSlot; 4] = [
        ArmorSlot::Head,
        ArmorSlot::Chest,
        ArmorSlot::Legs,
        ArmorSlot::Feet,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Damage mitigation values the physics functions need.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Resistances {
    /// Total armor points (0..=30).
    pub armor: f32,
    /// Total armor toughness.
    pub toughness: f32,
    /// Resistance status effect level; 0 means no effect, 1 means Resistance I.
    pub resistance_level: u8,
    /// Enchantment protection factor against explosions (blast protection counts double).
    pub blast_protection_factor: u8,
    /// Enchantment protection factor against falls (feather falling counts triple).
    pub fall_protection_factor: u8,
}

/// Immutable snapshot of the actor, produced fresh by the host for every evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorSnapshot {
    pub health: f32,
    pub max_health: f32,
    pub position: Vec3,
    pub velocity: Vec3,
    pub fall_distance: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pose: Pose,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: ActorFlags,
    /// Indexed by [`ArmorSlot::index`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub armor: [ItemStack; 4],
    #[cfg_attr(feature = "serde", serde(default))]
    pub offhand: ItemStack,
    #[cfg_attr(feature = "serde", serde(default))]
    pub resistances: Resistances,
}

impl ActorSnapshot {
    pub const DEFAULT_MAX_HEALTH: f32 = 20.0;

    /// Survival-mode actor standing at `position` with full health and no armor.
    pub fn new(position: Vec3) -> Self {
        Self {
            health: Self::DEFAULT_MAX_HEALTH,
            max_health: Self::DEFAULT_MAX_HEALTH,
            position,
            velocity: Vec3::ZERO,
            fall_distance: 0.0,
            pose: Pose::Standing,
            flags: ActorFlags::ON_GROUND,
            armor: [ItemStack::EMPTY; 4],
            offhand: ItemStack::EMPTY,
            resistances: Resistances::default(),
        }
    }

    #[must_use]
    pub fn with_health(mut self, health: f32) -> Self {
        self.health = health;
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: ActorFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn with_armor(mut self, slot: ArmorSlot, stack: ItemStack) -> Self {
        self.armor[slot.index()] = stack;
        self
    }

    /// Fills every armor slot with its matching piece.
    #[must_use]
    pub fn with_full_armor(self) -> Self {
        use super::ItemKind;
        self.with_armor(ArmorSlot::Head, ItemStack::single(ItemKind::Helmet))
            .with_armor(ArmorSlot::Chest, ItemStack::single(ItemKind::Chestplate))
            .with_armor(ArmorSlot::Legs, ItemStack::single(ItemKind::Leggings))
            .with_armor(ArmorSlot::Feet, ItemStack::single(ItemKind::Boots))
    }

    #[must_use]
    pub fn with_offhand(mut self, stack: ItemStack) -> Self {
        self.offhand = stack;
        self
    }

    #[must_use]
    pub fn falling(mut self, fall_distance: f32, velocity: Vec3) -> Self {
        self.fall_distance = fall_distance;
        self.velocity = velocity;
        self.flags.remove(ActorFlags::ON_GROUND);
        self
    }

    pub fn block_pos(&self) -> BlockPos {
        self.position.block_pos()
    }

    pub fn is_creative(&self) -> bool {
        self.flags.contains(ActorFlags::CREATIVE)
    }

    pub fn is_spectator(&self) -> bool {
        self.flags.contains(ActorFlags::SPECTATOR)
    }

    pub fn is_dead(&self) -> bool {
        self.flags.contains(ActorFlags::DEAD) || self.health <= 0.0
    }

    /// Creative, spectator and dead actors never need a totem.
    pub fn is_exempt(&self) -> bool {
        self.is_creative() || self.is_spectator() || self.is_dead()
    }

    /// Gliding with an elytra in the fall-flying pose.
    pub fn is_gliding(&self) -> bool {
        self.flags.contains(ActorFlags::FALL_FLYING) && self.pose == Pose::FallFlying
    }

    pub fn has_missing_armor(&self) -> bool {
        self.armor.iter().any(|stack| stack.is_empty())
    }
}
