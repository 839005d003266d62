//! Damage prediction and off-hand totem decisions.
//!
//! `totem-core` holds the pure decision engine: per-evaluation snapshots of the
//! actor and inventory, read-only oracles for the host world and its damage
//! functions, three independent damage predictors, the policies that turn
//! their estimates into a verdict, and the executor that turns a verdict into
//! at most one inventory click. Nothing here blocks or talks to the host
//! directly.
pub mod assess;
pub mod config;
pub mod env;
pub mod equip;
pub mod error;
pub mod hole;
pub mod predict;
pub mod sphere;
pub mod state;

pub use assess::{
    Assessment, DamageBreakdown, EquipPolicy, EvaluationContext, HealthGate, Reason,
    ThreatAssessor, should_equip_protective_item,
};
pub use config::{
    Bounds, Companions, FallConfig, HealthConfig, HealthGateConfig, SafetyConfig, ThreatConfig,
};
pub use env::{
    Env, Explosion, PhysicsOracle, TotemEnv, VanillaPhysics, WorldOracle, WorldSnapshot,
};
pub use equip::{
    ClickAction, EquipExecutor, EquipOutcome, InventoryConstraints, InventoryScheduler,
    SwitchTimer,
};
pub use error::ConfigError;
pub use hole::Shelter;
pub use predict::DamageEstimate;
pub use sphere::{BLOCK_SCAN_RADIUS, SpatialOffsetSet, SphereCache};
pub use state::{
    ActorFlags, ActorSnapshot, ArmorSlot, BlockKind, BlockPos, BlockState, Difficulty,
    Dimension, EntityId, EntityKind, EntitySnapshot, InventorySlot, InventorySnapshot, ItemKind,
    ItemStack, Millis, Pose, Resistances, Vec3,
};
