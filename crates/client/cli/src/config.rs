//! Simulator configuration read from the process environment.
use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use totem_runtime::PolicyKind;

/// Everything the simulator needs before it can load content.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CliConfig {
    /// Settings TOML; defaults apply when unset.
    pub settings_path: Option<PathBuf>,
    pub scenario_path: Option<PathBuf>,
    pub policy: PolicyKind,
    pub session_id: Option<String>,
    /// Overrides the platform cache directory for logs.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TOTEM_CONFIG` - Settings file (default: built-in defaults)
    /// - `TOTEM_SCENARIO` - Scenario file to evaluate (required to run)
    /// - `TOTEM_POLICY` - `threat` or `health_gate` (default: `threat`)
    /// - `TOTEM_SESSION_ID` - Log session identifier (default: auto-generated)
    /// - `TOTEM_LOG_DIR` - Log directory (default: platform-specific)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let policy = match read("TOTEM_POLICY") {
            Some(name) => PolicyKind::parse(name.trim()).context("TOTEM_POLICY")?,
            None => PolicyKind::default(),
        };

        Ok(Self {
            settings_path: read("TOTEM_CONFIG").map(PathBuf::from),
            scenario_path: read("TOTEM_SCENARIO").map(PathBuf::from),
            policy,
            session_id: read("TOTEM_SESSION_ID"),
            log_dir: read("TOTEM_LOG_DIR").map(PathBuf::from),
        })
    }
}
