//! Forward simulation of a free-falling actor.

use crate::env::WorldOracle;
use crate::state::{ActorSnapshot, BlockPos, Vec3};

pub const GRAVITY: f64 = 0.08;
pub const VERTICAL_DRAG: f64 = 0.98;
pub const HORIZONTAL_DRAG: f64 = 0.91;
/// Speed limit per axis in blocks per tick, the vertical speed reached after a long free fall.
pub const TERMINAL_VELOCITY: f64 = 3.92;

/// First block a falling actor runs into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Collision {
    pub pos: BlockPos,
    /// Simulated tick (1-based) in which the collision happens.
    pub tick: u32,
}

/// Ballistic motion of the actor without player input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FallingTrajectory {
    position: Vec3,
    velocity: Vec3,
}

impl FallingTrajectory {
    /// Velocity components are clamped to [`TERMINAL_VELOCITY`], so each tick
    /// scans a bounded column.
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        let limit = |speed: f64| {
            if speed.is_finite() {
                speed.clamp(-TERMINAL_VELOCITY, TERMINAL_VELOCITY)
            } else {
                0.0
            }
        };
        Self {
            position,
            velocity: Vec3::new(limit(velocity.x), limit(velocity.y), limit(velocity.z)),
        }
    }

    pub fn from_actor(actor: &ActorSnapshot) -> Self {
        Self::new(actor.position, actor.velocity)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Advances one tick and returns the position before the move.
    fn step(&mut self) -> Vec3 {
        let previous = self.position;
        self.position = self.position + self.velocity;
        self.velocity = Vec3::new(
            self.velocity.x * HORIZONTAL_DRAG,
            (self.velocity.y - GRAVITY) * VERTICAL_DRAG,
            self.velocity.z * HORIZONTAL_DRAG,
        );
        previous
    }

    /// Simulates up to `max_ticks` ticks and reports the first block that stops the fall.
    ///
    /// Returns `None` if nothing is hit within the bound.
    pub fn find_collision(
        mut self,
        world: &(impl WorldOracle + ?Sized),
        max_ticks: u32,
    ) -> Option<Collision> {
        for tick in 1..=max_ticks {
            let previous = self.step();
            if self.position.y >= previous.y {
                continue;
            }

            let column = self.position.block_pos();
            let top = previous.y.floor() as i32;
            let bottom = self.position.y.floor() as i32;

            let hit = (bottom..=top)
                .rev()
                .map(|y| BlockPos::new(column.x, y, column.z))
                .find(|pos| world.block_state(*pos).kind.stops_fall());

            if let Some(pos) = hit {
                return Some(Collision { pos, tick });
            }
        }
        None
    }
}
