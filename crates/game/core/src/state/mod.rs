//! Snapshot types sampled from the host engine.
//!
//! Everything here is a plain value produced fresh for each evaluation; the
//! engine owns the authoritative state and nothing in this crate persists it.
mod actor;
mod block;
mod common;
mod entity;
mod inventory;
mod item;

pub use actor::{ActorFlags, ActorSnapshot, ArmorSlot, Pose, Resistances};
pub use block::{BlockKind, BlockState, Difficulty, Dimension};
pub use common::{BlockPos, EntityId, Millis, Vec3};
pub use entity::{EntityKind, EntitySnapshot};
pub use inventory::{HOTBAR_SIZE, InventorySlot, InventorySnapshot, MAIN_SIZE};
pub use item::{ItemKind, ItemStack};
