//! Owned, serializable world snapshot.
//!
//! Captures just enough of the host world (blocks near the actor, loaded
//! entities, dimension rules) to replay an evaluation offline or in tests.

use std::collections::BTreeMap;

use super::WorldOracle;
use crate::state::{
    BlockKind, BlockPos, BlockState, Difficulty, Dimension, EntityId, EntityKind, EntitySnapshot,
    Vec3,
};

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldSnapshot {
    pub dimension: Dimension,
    pub difficulty: Difficulty,
    /// Non-air blocks; absent positions read as air.
    pub blocks: BTreeMap<BlockPos, BlockState>,
    pub entities: Vec<EntitySnapshot>,
}

impl WorldSnapshot {
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            ..Self::default()
        }
    }

    pub fn set_block(&mut self, pos: BlockPos, state: impl Into<BlockState>) {
        let state = state.into();
        if state.kind == BlockKind::Air {
            self.blocks.remove(&pos);
        } else {
            self.blocks.insert(pos, state);
        }
    }

    #[must_use]
    pub fn with_block(mut self, pos: BlockPos, state: impl Into<BlockState>) -> Self {
        self.set_block(pos, state);
        self
    }

    /// Fills the horizontal square `[-radius, radius]²` at height `y` with `kind`.
    #[must_use]
    pub fn with_floor(mut self, y: i32, radius: i32, kind: BlockKind) -> Self {
        for x in -radius..=radius {
            for z in -radius..=radius {
                self.set_block(BlockPos::new(x, y, z), kind);
            }
        }
        self
    }

    /// Adds an entity, assigning the next free id.
    #[must_use]
    pub fn with_entity(mut self, kind: EntityKind, position: Vec3) -> Self {
        let id = EntityId(self.entities.len() as u32 + 1);
        self.entities.push(EntitySnapshot::new(id, kind, position));
        self
    }
}

impl WorldOracle for WorldSnapshot {
    fn entities(&self) -> Vec<EntitySnapshot> {
        self.entities.clone()
    }

    fn block_state(&self, pos: BlockPos) -> BlockState {
        self.blocks.get(&pos).copied().unwrap_or(BlockState::AIR)
    }

    fn dimension(&self) -> Dimension {
        self.dimension
    }

    fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}
