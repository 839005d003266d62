//! Data files for the totem engine.
//!
//! Loaders turn TOML settings and RON scenarios into `totem-core` types:
//! - Module settings (`[threat]` and `[health_gate]` tables, TOML)
//! - Evaluation scenarios: actor, inventory, nearby world and clock (RON)
//!
//! Content is read once at startup; nothing here is consulted during an
//! evaluation.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ActorSpec, ConfigLoader, DimensionSpec, LoadResult, Scenario, ScenarioLoader, SettingsFile,
};
