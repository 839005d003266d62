//! Detection of structurally protected positions ("safe holes").

use crate::env::WorldOracle;
use crate::state::{ActorSnapshot, BlockPos};

/// How the actor is shielded from explosions, if at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Shelter {
    /// The actor's feet are inside a solid block.
    Burrowed,
    /// A 1×1 hole with blast-proof floor and walls.
    Hole,
}

/// The actor's feet are below the top of the block they occupy.
///
/// Standing on a partial-height block (ender chest, bed) puts the feet in that
/// block's cell without being inside it.
pub fn is_burrowed(actor: &ActorSnapshot, world: &(impl WorldOracle + ?Sized)) -> bool {
    let feet = actor.block_pos();
    let depth = (actor.position.y - feet.y as f64) as f32;
    depth < world.block_state(feet).kind.collision_height()
}

/// The actor stands in a 1×1 pocket whose floor and four walls are blast-proof.
pub fn is_in_hole(actor: &ActorSnapshot, world: &(impl WorldOracle + ?Sized)) -> bool {
    is_hole_at(actor.block_pos(), world)
}

/// Whether `feet` is the open cell of a 1×1 blast-proof hole.
pub fn is_hole_at(feet: BlockPos, world: &(impl WorldOracle + ?Sized)) -> bool {
    let open = |pos: BlockPos| !world.block_state(pos).kind.is_solid();
    let proof = |pos: BlockPos| world.block_state(pos).kind.is_blast_proof();

    open(feet)
        && open(feet.up())
        && proof(feet.down())
        && feet.horizontal_neighbors().into_iter().all(proof)
}

/// Burrowed takes precedence over hole.
pub fn shelter(actor: &ActorSnapshot, world: &(impl WorldOracle + ?Sized)) -> Option<Shelter> {
    if is_burrowed(actor, world) {
        Some(Shelter::Burrowed)
    } else if is_in_hole(actor, world) {
        Some(Shelter::Hole)
    } else {
        None
    }
}
