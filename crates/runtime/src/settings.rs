//! Live module settings and change notification.
//!
//! Evaluations never read the store directly: they take a [`Settings`] copy
//! at the start of an opportunity. Writers go through [`SettingsStore`], which
//! clamps the new values, diffs them against the old ones and tells every
//! registered [`SettingsObserver`] which settings changed.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use totem_content::SettingsFile;
use totem_core::{HealthGateConfig, SphereCache, ThreatConfig};
use tracing::{debug, info, warn};

use crate::error::Result;

/// Complete settings of both policies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub threat: ThreatConfig,
    pub health_gate: HealthGateConfig,
}

impl Settings {
    pub fn new(threat: ThreatConfig, health_gate: HealthGateConfig) -> Self {
        Self {
            threat,
            health_gate,
        }
    }

    #[must_use]
    pub fn clamped(self) -> Self {
        Self::new(self.threat.clamped(), self.health_gate.clamped())
    }

    pub fn validate(&self) -> Result<()> {
        self.threat.validate()?;
        self.health_gate.validate()?;
        Ok(())
    }
}

impl From<SettingsFile> for Settings {
    fn from(file: SettingsFile) -> Self {
        Self::new(file.threat, file.health_gate)
    }
}

/// One user-visible setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum SettingChange {
    Enabled,
    SwitchDelay,
    SendDirectly,
    HealthEnabled,
    HealthThreshold,
    SafetyEnabled,
    SafeHealth,
    SubtractCalculatedDamage,
    PredictExplosionEntities,
    PredictExplosionBlocks,
    PredictFallDamage,
    IgnoreElytra,
    MissingArmor,
    SwitchBack,
    NoFallCompanion,
    HealthGateEnabled,
    TargetHealth,
}

impl SettingChange {
    /// Every setting that differs between `old` and `new`, in declaration order.
    pub fn diff(old: &Settings, new: &Settings) -> Vec<SettingChange> {
        let (a, b) = (&old.threat, &new.threat);
        let (ha, hb) = (&a.health, &b.health);
        let (ga, gb) = (&old.health_gate, &new.health_gate);

        [
            (a.enabled != b.enabled, SettingChange::Enabled),
            (a.switch_delay_ms != b.switch_delay_ms, SettingChange::SwitchDelay),
            (a.send_directly != b.send_directly, SettingChange::SendDirectly),
            (ha.enabled != hb.enabled, SettingChange::HealthEnabled),
            (ha.health_threshold != hb.health_threshold, SettingChange::HealthThreshold),
            (ha.safety.enabled != hb.safety.enabled, SettingChange::SafetyEnabled),
            (ha.safety.safe_health != hb.safety.safe_health, SettingChange::SafeHealth),
            (
                ha.subtract_calculated_damage != hb.subtract_calculated_damage,
                SettingChange::SubtractCalculatedDamage,
            ),
            (
                ha.predict_explosion_entities != hb.predict_explosion_entities,
                SettingChange::PredictExplosionEntities,
            ),
            (
                ha.predict_explosion_blocks != hb.predict_explosion_blocks,
                SettingChange::PredictExplosionBlocks,
            ),
            (ha.fall.enabled != hb.fall.enabled, SettingChange::PredictFallDamage),
            (ha.fall.ignore_elytra != hb.fall.ignore_elytra, SettingChange::IgnoreElytra),
            (ha.missing_armor != hb.missing_armor, SettingChange::MissingArmor),
            (ha.switch_back != hb.switch_back, SettingChange::SwitchBack),
            (a.companions.no_fall != b.companions.no_fall, SettingChange::NoFallCompanion),
            (ga.enabled != gb.enabled, SettingChange::HealthGateEnabled),
            (ga.target_health != gb.target_health, SettingChange::TargetHealth),
        ]
        .into_iter()
        .filter_map(|(changed, change)| changed.then_some(change))
        .collect()
    }
}

/// Reacts to settings changes, e.g. by rebuilding derived data.
///
/// Observers run synchronously on the writer's thread after the new settings
/// are published, once per changed setting.
pub trait SettingsObserver: Send + Sync {
    /// Returns a human-readable name for this observer (used in logging).
    fn name(&self) -> &'static str;

    fn on_change(&self, change: SettingChange, settings: &Settings);
}

/// Owner of the live [`Settings`].
#[derive(Default)]
pub struct SettingsStore {
    current: RwLock<Settings>,
    observers: Vec<Arc<dyn SettingsObserver>>,
}

impl SettingsStore {
    /// Creates a store holding `settings` (clamped) without notifying anyone.
    pub fn new(settings: Settings) -> Self {
        Self {
            current: RwLock::new(settings.clamped()),
            observers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn SettingsObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Copy of the current settings.
    pub fn snapshot(&self) -> Settings {
        *self.read()
    }

    /// Applies `edit` to a copy of the settings, clamps and publishes it.
    ///
    /// Returns the settings that actually changed.
    pub fn update(&self, edit: impl FnOnce(&mut Settings)) -> Vec<SettingChange> {
        let (changes, published) = {
            let mut current = self.write();
            let mut next = *current;
            edit(&mut next);
            let next = next.clamped();
            let changes = SettingChange::diff(&current, &next);
            *current = next;
            (changes, next)
        };

        self.notify(&changes, &published);
        changes
    }

    /// Replaces all settings, clamping out-of-range values.
    pub fn replace(&self, settings: Settings) -> Vec<SettingChange> {
        self.update(|current| *current = settings)
    }

    /// Replaces all settings, rejecting out-of-range values instead of clamping them.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::InvalidSettings`](crate::RuntimeError::InvalidSettings)
    /// and leaves the store untouched.
    pub fn try_replace(&self, settings: Settings) -> Result<Vec<SettingChange>> {
        settings.validate()?;
        Ok(self.replace(settings))
    }

    fn notify(&self, changes: &[SettingChange], settings: &Settings) {
        for change in changes {
            info!(setting = %change, "setting changed");
            for observer in &self.observers {
                debug!(observer = observer.name(), setting = %change, "notifying observer");
                observer.on_change(*change, settings);
            }
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Settings> {
        self.current.read().unwrap_or_else(|poisoned| {
            warn!("settings lock poisoned, reading last published settings");
            PoisonError::into_inner(poisoned)
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, Settings> {
        self.current.write().unwrap_or_else(|poisoned| {
            warn!("settings lock poisoned, overwriting last published settings");
            PoisonError::into_inner(poisoned)
        })
    }
}

/// Rebuilds the block scan sphere whenever block prediction is toggled.
pub struct SphereRecompute {
    cache: Arc<SphereCache>,
    radius: f32,
}

impl SphereRecompute {
    pub fn new(cache: Arc<SphereCache>, radius: f32) -> Self {
        Self { cache, radius }
    }
}

impl SettingsObserver for SphereRecompute {
    fn name(&self) -> &'static str {
        "sphere_recompute"
    }

    fn on_change(&self, change: SettingChange, _settings: &Settings) {
        if change != SettingChange::PredictExplosionBlocks {
            return;
        }
        let sphere = self.cache.recompute(self.radius);
        info!(
            radius = self.radius,
            offsets = sphere.len(),
            "block scan sphere published"
        );
    }
}
