//! Content loaders for reading settings and scenarios from files.

pub mod config;
pub mod scenario;

pub use config::{ConfigLoader, SettingsFile};
pub use scenario::{ActorSpec, DimensionSpec, Scenario, ScenarioLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
