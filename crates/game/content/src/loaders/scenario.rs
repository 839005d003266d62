//! Scenario loader.
//!
//! A scenario freezes one evaluation: the actor, its inventory, the blocks and
//! entities around it and the wall clock. Positions are plain tuples so that
//! hand-written files stay short; the loader expands them into core types.

use std::path::Path;

use serde::{Deserialize, Serialize};
use totem_core::{
    ActorFlags, ActorSnapshot, ArmorSlot, BlockKind, BlockPos, BlockState, Difficulty, Dimension,
    EntityKind, InventorySlot, InventorySnapshot, ItemKind, ItemStack, Millis, Pose, Resistances,
    Vec3, WorldSnapshot,
};

use crate::loaders::{LoadResult, read_file};

type Point = (f64, f64, f64);

/// Named dimension rule sets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DimensionSpec {
    #[default]
    Overworld,
    Nether,
    End,
}

impl From<DimensionSpec> for Dimension {
    fn from(spec: DimensionSpec) -> Self {
        match spec {
            DimensionSpec::Overworld => Dimension::OVERWORLD,
            DimensionSpec::Nether => Dimension::NETHER,
            DimensionSpec::End => Dimension::END,
        }
    }
}

/// Actor description; everything but the position has a survival default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActorSpec {
    pub position: Point,
    #[serde(default = "ActorSpec::default_health")]
    pub health: f32,
    #[serde(default)]
    pub velocity: Point,
    #[serde(default)]
    pub fall_distance: f32,
    #[serde(default)]
    pub pose: Pose,
    #[serde(default = "ActorSpec::default_flags")]
    pub flags: ActorFlags,
    /// Wear a full armor set; single pieces can be removed via `bare_slots`.
    #[serde(default = "ActorSpec::default_armored")]
    pub armored: bool,
    #[serde(default)]
    pub bare_slots: Vec<ArmorSlot>,
    #[serde(default)]
    pub offhand: ItemKind,
    #[serde(default)]
    pub resistances: Resistances,
}

impl ActorSpec {
    fn default_health() -> f32 {
        ActorSnapshot::DEFAULT_MAX_HEALTH
    }

    fn default_flags() -> ActorFlags {
        ActorFlags::ON_GROUND
    }

    fn default_armored() -> bool {
        true
    }

    fn into_snapshot(self) -> ActorSnapshot {
        let (x, y, z) = self.position;
        let mut actor = ActorSnapshot::new(Vec3::new(x, y, z)).with_health(self.health);
        if self.armored {
            actor = actor.with_full_armor();
        }
        for slot in self.bare_slots {
            actor = actor.with_armor(slot, ItemStack::EMPTY);
        }

        let (vx, vy, vz) = self.velocity;
        actor.velocity = Vec3::new(vx, vy, vz);
        actor.fall_distance = self.fall_distance;
        actor.pose = self.pose;
        actor.flags = self.flags;
        actor.resistances = self.resistances;
        actor.with_offhand(stack_of(self.offhand, 1))
    }
}

/// Scenario data structure for RON files.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct ScenarioRon {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    now_ms: u64,
    #[serde(default)]
    dimension: DimensionSpec,
    #[serde(default)]
    difficulty: Difficulty,
    actor: ActorSpec,
    #[serde(default)]
    inventory: Vec<(InventorySlot, ItemKind, u8)>,
    #[serde(default)]
    floors: Vec<(i32, i32, BlockKind)>, // (y, radius, kind)
    #[serde(default)]
    blocks: Vec<(i32, i32, i32, BlockKind)>,
    #[serde(default)]
    anchors: Vec<(i32, i32, i32, u8)>, // (x, y, z, charges)
    #[serde(default)]
    entities: Vec<(EntityKind, Point)>,
}

/// A fully expanded evaluation input.
#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub actor: ActorSnapshot,
    pub inventory: InventorySnapshot,
    pub world: WorldSnapshot,
    pub now: Millis,
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file.
    ///
    /// Unnamed scenarios are named after the file stem.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        let mut scenario = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid scenario {}: {}", path.display(), e))?;

        if scenario.name.is_empty() {
            if let Some(stem) = path.file_stem() {
                scenario.name = stem.to_string_lossy().into_owned();
            }
        }
        Ok(scenario)
    }

    /// Parse a scenario from RON text.
    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let data: ScenarioRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        let actor = data.actor.into_snapshot();

        let mut inventory = InventorySnapshot::empty();
        for (slot, kind, count) in data.inventory {
            if matches!(slot, InventorySlot::OffHand | InventorySlot::Armor(_)) {
                anyhow::bail!("Slot {} is taken from the actor, not the inventory list", slot);
            }
            if inventory.get(slot).is_none() {
                anyhow::bail!("Slot {} does not exist", slot);
            }
            inventory = inventory.with(slot, stack_of(kind, count));
        }
        // The actor's worn items are the single source of truth.
        inventory.armor = actor.armor;
        inventory.offhand = actor.offhand;

        let mut world = WorldSnapshot::new(data.dimension.into());
        world.difficulty = data.difficulty;
        for (y, radius, kind) in data.floors {
            world = world.with_floor(y, radius, kind);
        }
        for (x, y, z, kind) in data.blocks {
            world.set_block(BlockPos::new(x, y, z), kind);
        }
        for (x, y, z, charges) in data.anchors {
            world.set_block(BlockPos::new(x, y, z), BlockState::respawn_anchor(charges));
        }
        for (kind, (x, y, z)) in data.entities {
            world = world.with_entity(kind, Vec3::new(x, y, z));
        }

        Ok(Scenario {
            name: data.name.unwrap_or_default(),
            actor,
            inventory,
            world,
            now: Millis(data.now_ms),
        })
    }
}

fn stack_of(kind: ItemKind, count: u8) -> ItemStack {
    if kind == ItemKind::Empty || count == 0 {
        ItemStack::EMPTY
    } else {
        ItemStack::new(kind, count)
    }
}
