//! Immutable configuration snapshots passed into every evaluation.
//!
//! The settings framework owns the live values; each evaluation receives a
//! copy so predictors never read each other's toggles through shared state.

use crate::error::ConfigError;

/// Inclusive range of a bounded integer setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub name: &'static str,
    pub min: u32,
    pub max: u32,
}

impl Bounds {
    pub const fn new(name: &'static str, min: u32, max: u32) -> Self {
        Self { name, min, max }
    }

    pub fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }

    pub fn check(&self, value: u32) -> Result<(), ConfigError> {
        if (self.min..=self.max).contains(&value) {
            Ok(())
        } else {
            Err(ConfigError::OutOfRange {
                name: self.name,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Settings of the off-hand totem module.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ThreatConfig {
    /// Master toggle of the totem behaviour.
    pub enabled: bool,
    /// Minimum time between two off-hand switches.
    pub switch_delay_ms: u32,
    /// Bypass the inventory scheduler and click immediately.
    pub send_directly: bool,
    pub health: HealthConfig,
    pub companions: Companions,
}

/// Health-driven switching: thresholds, damage prediction and switch-back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HealthConfig {
    /// When off, a totem is always wanted in the off-hand.
    pub enabled: bool,
    /// Health at or below which a totem is equipped.
    pub health_threshold: u8,
    pub safety: SafetyConfig,
    /// When off, predicted damage only matters if it would be lethal.
    pub subtract_calculated_damage: bool,
    pub predict_explosion_entities: bool,
    pub predict_explosion_blocks: bool,
    pub fall: FallConfig,
    /// Treat any empty armor slot as maximal risk.
    pub missing_armor: bool,
    /// Put the original item back once the danger is over.
    pub switch_back: bool,
}

/// Lets a useful off-hand item stay while the actor sits in a blast-proof hole.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SafetyConfig {
    pub enabled: bool,
    /// Below this health the hole no longer suppresses switching.
    pub safe_health: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FallConfig {
    pub enabled: bool,
    /// Skip fall prediction while gliding.
    pub ignore_elytra: bool,
}

/// State of other modules the predictors depend on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Companions {
    /// The fall-protection module is active.
    pub no_fall: bool,
}

impl ThreatConfig {
    pub const SWITCH_DELAY: Bounds = Bounds::new("switch_delay_ms", 0, 500);
    pub const HEALTH_THRESHOLD: Bounds = Bounds::new("health.health_threshold", 0, 20);
    pub const SAFE_HEALTH: Bounds = Bounds::new("health.safety.safe_health", 0, 20);

    pub const DEFAULT_HEALTH_THRESHOLD: u8 = 14;
    pub const DEFAULT_SAFE_HEALTH: u8 = 10;

    pub fn new() -> Self {
        Self {
            enabled: true,
            switch_delay_ms: 0,
            send_directly: false,
            health: HealthConfig::default(),
            companions: Companions::default(),
        }
    }

    /// Forces every bounded setting into its range.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.switch_delay_ms = Self::SWITCH_DELAY.clamp(self.switch_delay_ms);
        self.health.health_threshold =
            Self::HEALTH_THRESHOLD.clamp(self.health.health_threshold as u32) as u8;
        self.health.safety.safe_health =
            Self::SAFE_HEALTH.clamp(self.health.safety.safe_health as u32) as u8;
        self
    }

    /// Reports the first bounded setting that is out of range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OutOfRange`] naming the offending setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::SWITCH_DELAY.check(self.switch_delay_ms)?;
        Self::HEALTH_THRESHOLD.check(self.health.health_threshold as u32)?;
        Self::SAFE_HEALTH.check(self.health.safety.safe_health as u32)
    }
}

impl Default for ThreatConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            health_threshold: ThreatConfig::DEFAULT_HEALTH_THRESHOLD,
            safety: SafetyConfig::default(),
            subtract_calculated_damage: true,
            predict_explosion_entities: true,
            predict_explosion_blocks: false,
            fall: FallConfig::default(),
            missing_armor: true,
            switch_back: true,
        }
    }
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            safe_health: ThreatConfig::DEFAULT_SAFE_HEALTH,
        }
    }
}

impl Default for FallConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ignore_elytra: false,
        }
    }
}

/// Settings of the stand-alone auto-totem policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HealthGateConfig {
    pub enabled: bool,
    /// Above this health no totem is equipped.
    pub target_health: u8,
}

impl HealthGateConfig {
    pub const TARGET_HEALTH: Bounds = Bounds::new("target_health", 0, 20);
    pub const DEFAULT_TARGET_HEALTH: u8 = 18;

    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.target_health = Self::TARGET_HEALTH.clamp(self.target_health as u32) as u8;
        self
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::OutOfRange`] if `target_health` exceeds 20.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::TARGET_HEALTH.check(self.target_health as u32)
    }
}

impl Default for HealthGateConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            target_health: Self::DEFAULT_TARGET_HEALTH,
        }
    }
}
