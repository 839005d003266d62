//! Module settings loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use totem_core::{HealthGateConfig, ThreatConfig};

use crate::loaders::{LoadResult, read_file};

/// Settings file layout: one table per policy, both optional.
///
/// ```toml
/// [threat]
/// switch_delay_ms = 100
///
/// [threat.health]
/// health_threshold = 12
/// predict_explosion_blocks = true
///
/// [health_gate]
/// target_health = 16
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsFile {
    pub threat: ThreatConfig,
    pub health_gate: HealthGateConfig,
}

/// Loader for module settings from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings from a TOML file.
    ///
    /// Out-of-range values are rejected rather than clamped, so a typo in a
    /// settings file never silently turns into a different threshold.
    pub fn load(path: &Path) -> LoadResult<SettingsFile> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid settings in {}: {}", path.display(), e))
    }

    /// Parse settings from TOML text.
    pub fn parse(content: &str) -> LoadResult<SettingsFile> {
        let settings: SettingsFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse settings TOML: {}", e))?;

        settings
            .threat
            .validate()
            .map_err(|e| anyhow::anyhow!("[threat] {} ({})", e, e.error_code()))?;
        settings
            .health_gate
            .validate()
            .map_err(|e| anyhow::anyhow!("[health_gate] {} ({})", e, e.error_code()))?;

        Ok(settings)
    }

    /// Render settings back to TOML, e.g. to write out the defaults.
    pub fn to_toml(settings: &SettingsFile) -> LoadResult<String> {
        toml::to_string_pretty(settings)
            .map_err(|e| anyhow::anyhow!("Failed to serialize settings: {}", e))
    }
}
