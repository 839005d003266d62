//! Precomputed block offsets scanned by the block explosion predictor.

use std::sync::{Arc, PoisonError, RwLock};

use crate::state::BlockPos;

/// Radius scanned around the actor for explosive blocks.
pub const BLOCK_SCAN_RADIUS: f32 = 5.0;

/// Relative block coordinates forming an approximate sphere around the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct SpatialOffsetSet {
    radius: f32,
    offsets: Vec<BlockPos>,
}

impl SpatialOffsetSet {
    /// All integer offsets with `x² + y² + z² <= radius²`, nearest first.
    pub fn sphere(radius: f32) -> Self {
        let radius = radius.max(0.0);
        let bound = radius.ceil() as i32;
        let limit = radius * radius;

        let mut offsets = Vec::new();
        for x in -bound..=bound {
            for y in -bound..=bound {
                for z in -bound..=bound {
                    let offset = BlockPos::new(x, y, z);
                    if offset.length_squared() as f32 <= limit {
                        offsets.push(offset);
                    }
                }
            }
        }
        offsets.sort_by_key(|offset| offset.length_squared());

        Self { radius, offsets }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn offsets(&self) -> &[BlockPos] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Absolute positions of the set translated to `origin`.
    pub fn around(&self, origin: BlockPos) -> impl Iterator<Item = BlockPos> + '_ {
        self.offsets.iter().map(move |offset| *offset + origin)
    }
}

/// Lazily computed, atomically published [`SpatialOffsetSet`].
///
/// Unset until the first [`recompute`](Self::recompute). A recompute builds the
/// new set completely before swapping it in, so readers holding the previous
/// `Arc` keep a consistent set and new readers only ever see a finished one.
#[derive(Debug, Default)]
pub struct SphereCache {
    current: RwLock<Option<Arc<SpatialOffsetSet>>>,
}

impl SphereCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The published set, if one has been computed.
    pub fn get(&self) -> Option<Arc<SpatialOffsetSet>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Builds a sphere of `radius` and publishes it, replacing any previous set.
    pub fn recompute(&self, radius: f32) -> Arc<SpatialOffsetSet> {
        let sphere = Arc::new(SpatialOffsetSet::sphere(radius));
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&sphere));
        sphere
    }

    pub fn is_computed(&self) -> bool {
        self.get().is_some()
    }
}
