//! Block and dimension descriptors read from the host world.

/// Block types the predictors and hole detection care about.
///
/// Anything else the host reports maps to [`BlockKind::Solid`] (full collision
/// cube with ordinary blast resistance) or [`BlockKind::Air`].
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
pub enum BlockKind {
    #[default]
    Air,
    /// Generic full block (stone, dirt, planks, ...).
    Solid,
    Glass,
    Obsidian,
    CryingObsidian,
    Bedrock,
    EnderChest,
    NetheriteBlock,
    AncientDebris,
    Anvil,
    Bed,
    RespawnAnchor,
    Water,
    Lava,
    Cobweb,
    PowderSnow,
    SlimeBlock,
    HayBlock,
    BubbleColumn,
    Scaffolding,
}

impl BlockKind {
    /// Explosion resistance as reported by the game.
    pub const fn blast_resistance(self) -> f32 {
        use BlockKind::*;
        match self {
            Air | Cobweb | PowderSnow | BubbleColumn | Scaffolding => 0.0,
            SlimeBlock => 0.0,
            Bed | Glass => 0.2,
            HayBlock => 0.5,
            Solid => 6.0,
            Water | Lava => 100.0,
            EnderChest => 600.0,
            Obsidian | CryingObsidian | NetheriteBlock | AncientDebris | Anvil
            | RespawnAnchor => 1200.0,
            Bedrock => 3_600_000.0,
        }
    }

    /// Blocks that survive the explosions considered here (obsidian tier and above).
    pub const fn is_blast_proof(self) -> bool {
        self.blast_resistance() >= 600.0
    }

    /// Whether the block has a collision shape the actor can stand on or be stuck in.
    pub const fn is_solid(self) -> bool {
        use BlockKind::*;
        !matches!(
            self,
            Air | Water | Lava | Cobweb | PowderSnow | BubbleColumn | Scaffolding
        )
    }

    /// Top of the collision shape above the block's lower face, in blocks.
    pub const fn collision_height(self) -> f32 {
        use BlockKind::*;
        match self {
            EnderChest => 0.875,
            Bed => 0.5625,
            kind if kind.is_solid() => 1.0,
            _ => 0.0,
        }
    }

    /// Landing in or on these blocks cancels fall damage entirely.
    pub const fn blocks_fall_damage(self) -> bool {
        use BlockKind::*;
        matches!(
            self,
            Water | Cobweb | PowderSnow | SlimeBlock | BubbleColumn | Scaffolding
        )
    }

    /// Whether a falling actor stops when entering this block.
    pub const fn stops_fall(self) -> bool {
        self.is_solid() || self.blocks_fall_damage() || matches!(self, BlockKind::Lava)
    }
}

/// Block kind plus the state properties the predictors inspect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockState {
    pub kind: BlockKind,
    /// Respawn anchor charge level (0..=4); zero for every other block.
    #[cfg_attr(feature = "serde", serde(default))]
    pub charges: u8,
}

impl BlockState {
    pub const AIR: Self = Self::new(BlockKind::Air);

    pub const fn new(kind: BlockKind) -> Self {
        Self { kind, charges: 0 }
    }

    pub const fn respawn_anchor(charges: u8) -> Self {
        Self {
            kind: BlockKind::RespawnAnchor,
            charges,
        }
    }

    pub const fn is_charged_anchor(self) -> bool {
        matches!(self.kind, BlockKind::RespawnAnchor) && self.charges > 0
    }
}

impl From<BlockKind> for BlockState {
    fn from(kind: BlockKind) -> Self {
        Self::new(kind)
    }
}

/// Dimension rules that decide whether beds and anchors explode when used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension {
    pub bed_works: bool,
    pub respawn_anchor_works: bool,
}

impl Dimension {
    pub const OVERWORLD: Self = Self {
        bed_works: true,
        respawn_anchor_works: false,
    };
    pub const NETHER: Self = Self {
        bed_works: false,
        respawn_anchor_works: true,
    };
    pub const END: Self = Self {
        bed_works: false,
        respawn_anchor_works: false,
    };
}

impl Default for Dimension {
    fn default() -> Self {
        Self::OVERWORLD
    }
}

/// World difficulty; scales explosion damage dealt to players.
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
pub enum Difficulty {
    Peaceful,
    Easy,
    #[default]
    Normal,
    Hard,
}
