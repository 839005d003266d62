use crate::state::{BlockPos, BlockState, Difficulty, Dimension, EntitySnapshot};

/// Read-only view of the host world around the actor.
///
/// Implementations are queried, never mutated, during an evaluation. Lookups
/// outside the loaded area return air rather than failing.
pub trait WorldOracle: Send + Sync {
    /// Every loaded entity, in no particular order.
    fn entities(&self) -> Vec<EntitySnapshot>;

    fn block_state(&self, pos: BlockPos) -> BlockState;

    fn dimension(&self) -> Dimension;

    fn difficulty(&self) -> Difficulty {
        Difficulty::Normal
    }
}
