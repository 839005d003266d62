//! Traits describing the host engine the decision engine reads from.
//!
//! The world oracle exposes blocks, entities and dimension rules; the physics
//! oracle exposes the engine's damage functions. The [`Env`] aggregate bundles
//! them so predictors can be called without hard coupling to a concrete
//! engine binding.
mod physics;
mod snapshot;
mod vanilla;
mod world;

pub use physics::{Explosion, PhysicsOracle};
pub use snapshot::WorldSnapshot;
pub use vanilla::{
    SAFE_FALL_DISTANCE, VanillaPhysics, apply_armor, apply_protection, apply_resistance,
};
pub use world::WorldOracle;

/// Aggregates the read-only oracles required by the predictors.
#[derive(Debug)]
pub struct Env<'a, W, P>
where
    W: WorldOracle + ?Sized,
    P: PhysicsOracle + ?Sized,
{
    world: &'a W,
    physics: &'a P,
}

pub type TotemEnv<'a> = Env<'a, dyn WorldOracle + 'a, dyn PhysicsOracle + 'a>;

impl<W, P> Clone for Env<'_, W, P>
where
    W: WorldOracle + ?Sized,
    P: PhysicsOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<W, P> Copy for Env<'_, W, P>
where
    W: WorldOracle + ?Sized,
    P: PhysicsOracle + ?Sized,
{
}

impl<'a, W, P> Env<'a, W, P>
where
    W: WorldOracle + ?Sized,
    P: PhysicsOracle + ?Sized,
{
    pub fn new(world: &'a W, physics: &'a P) -> Self {
        Self { world, physics }
    }

    pub fn world(&self) -> &'a W {
        self.world
    }

    pub fn physics(&self) -> &'a P {
        self.physics
    }
}

impl<'a, W, P> Env<'a, W, P>
where
    W: WorldOracle + 'a,
    P: PhysicsOracle + 'a,
{
    /// Converts this environment into a trait-object based [`TotemEnv`].
    pub fn as_totem_env(&self) -> TotemEnv<'a> {
        let world: &'a dyn WorldOracle = self.world;
        let physics: &'a dyn PhysicsOracle = self.physics;
        Env::new(world, physics)
    }
}
