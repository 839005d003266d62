//! The off-hand module: one evaluation and at most one click per opportunity.

use std::sync::Arc;

use serde::Serialize;
use totem_core::{
    ActorSnapshot, Assessment, BLOCK_SCAN_RADIUS, ClickAction, EquipExecutor, EquipOutcome,
    EquipPolicy, EvaluationContext, HealthGate, InventoryScheduler, InventorySlot,
    InventorySnapshot, ItemKind, Millis, SphereCache, ThreatAssessor, ThreatConfig, TotemEnv,
};
use tracing::{debug, info};

use crate::error::{Result, RuntimeError};
use crate::settings::{Settings, SettingsStore, SphereRecompute};

/// Which rule decides the verdict.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PolicyKind {
    #[default]
    Threat,
    HealthGate,
}

impl PolicyKind {
    /// # Errors
    ///
    /// Returns [`RuntimeError::UnknownPolicy`] for anything but `threat` or `health_gate`.
    pub fn parse(name: &str) -> Result<Self> {
        name.parse()
            .map_err(|_| RuntimeError::UnknownPolicy(name.to_string()))
    }

    /// Runs `f` with the policy built from the current settings.
    fn with_policy<R>(self, settings: &Settings, f: impl FnOnce(&dyn EquipPolicy) -> R) -> R {
        match self {
            PolicyKind::Threat => f(&ThreatAssessor::new(settings.threat)),
            PolicyKind::HealthGate => f(&HealthGate::new(settings.health_gate)),
        }
    }

    /// Executor settings: the stand-alone health gate always goes through the
    /// scheduler and has no switch delay of its own.
    fn executor_config(self, settings: &Settings) -> ThreatConfig {
        match self {
            PolicyKind::Threat => settings.threat,
            PolicyKind::HealthGate => ThreatConfig {
                switch_delay_ms: 0,
                send_directly: false,
                ..settings.threat
            },
        }
    }
}

/// Host state handed in for one inventory opportunity.
#[derive(Clone, Copy)]
pub struct Opportunity<'a> {
    pub actor: &'a ActorSnapshot,
    pub inventory: &'a InventorySnapshot,
    pub env: TotemEnv<'a>,
    pub now: Millis,
}

impl<'a> Opportunity<'a> {
    pub fn new(
        actor: &'a ActorSnapshot,
        inventory: &'a InventorySnapshot,
        env: TotemEnv<'a>,
        now: Millis,
    ) -> Self {
        Self {
            actor,
            inventory,
            env,
            now,
        }
    }
}

/// Item that was in the off-hand before a totem replaced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SwitchBack {
    /// Where the original item went, i.e. where the totem came from.
    pub slot: InventorySlot,
    pub item: ItemKind,
}

/// What happened during one opportunity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct OpportunityReport {
    pub policy: PolicyKind,
    pub assessment: Assessment,
    pub outcome: EquipOutcome,
    /// The outcome restores the original off-hand item.
    pub switched_back: bool,
}

/// Off-hand totem module wired to its settings, sphere cache and executor.
pub struct OffhandModule {
    policy: PolicyKind,
    settings: Arc<SettingsStore>,
    sphere: Arc<SphereCache>,
    executor: EquipExecutor,
    switch_back: Option<SwitchBack>,
}

impl OffhandModule {
    /// Creates the module and applies `settings` as a change from the defaults,
    /// so derived data such as the scan sphere is built right away.
    pub fn new(policy: PolicyKind, settings: Settings) -> Self {
        let sphere = Arc::new(SphereCache::new());
        let store = SettingsStore::new(Settings::default()).with_observer(Arc::new(
            SphereRecompute::new(Arc::clone(&sphere), BLOCK_SCAN_RADIUS),
        ));
        store.replace(settings);

        Self {
            policy,
            settings: Arc::new(store),
            sphere,
            executor: EquipExecutor::new(),
            switch_back: None,
        }
    }

    pub fn policy(&self) -> PolicyKind {
        self.policy
    }

    pub fn settings(&self) -> &Arc<SettingsStore> {
        &self.settings
    }

    pub fn sphere(&self) -> &Arc<SphereCache> {
        &self.sphere
    }

    /// The original off-hand item waiting to be restored, if any.
    pub fn pending_switch_back(&self) -> Option<SwitchBack> {
        self.switch_back
    }

    /// Evaluates the policy and submits at most one click.
    pub fn on_inventory_opportunity(
        &mut self,
        ctx: Opportunity<'_>,
        scheduler: &mut dyn InventoryScheduler,
    ) -> OpportunityReport {
        let settings = self.settings.snapshot();
        let sphere = self.sphere.get();
        let eval = EvaluationContext::new(ctx.actor, ctx.env, sphere.as_deref());

        let (name, assessment, wants_switch_back) = self.policy.with_policy(&settings, |policy| {
            (policy.name(), policy.assess(&eval), policy.switch_back())
        });

        debug!(
            policy = name,
            verdict = assessment.verdict,
            reason = %assessment.reason,
            health = assessment.health,
            damage = ?assessment.damage,
            "assessed off-hand"
        );

        let config = self.policy.executor_config(&settings);

        if assessment.verdict {
            let outcome = self.executor.maybe_equip(
                true,
                ctx.actor,
                ctx.inventory,
                &config,
                scheduler,
                ctx.now,
            );
            self.remember_original(outcome, ctx.actor);
            if outcome.is_switch() {
                info!(policy = name, reason = %assessment.reason, ?outcome, "equipping totem");
            }
            return self.report(assessment, outcome, false);
        }

        if !wants_switch_back {
            return self.report(assessment, EquipOutcome::NotNeeded, false);
        }

        match self.switch_back_action(ctx) {
            Some(action) => {
                let outcome = self.executor.submit(action, &config, scheduler, ctx.now);
                if outcome.is_switch() {
                    info!(policy = name, ?outcome, "switching back to original item");
                    self.switch_back = None;
                }
                self.report(assessment, outcome, outcome.is_switch())
            }
            None => self.report(assessment, EquipOutcome::NotNeeded, false),
        }
    }

    fn remember_original(&mut self, outcome: EquipOutcome, actor: &ActorSnapshot) {
        let action = match outcome {
            EquipOutcome::Scheduled(action) | EquipOutcome::Performed(action) => action,
            _ => return,
        };
        let ClickAction::Swap { from, .. } = action;
        let original = actor.offhand;
        self.switch_back = (!original.is_empty()).then_some(SwitchBack {
            slot: from,
            item: original.kind,
        });
    }

    /// Swap restoring the remembered item, if it is still where we left it.
    ///
    /// Forgets the memory once the totem has left the off-hand or the item
    /// has moved, since swapping then would shuffle unrelated items.
    fn switch_back_action(&mut self, ctx: Opportunity<'_>) -> Option<ClickAction> {
        let memory = self.switch_back?;
        let in_place = ctx
            .inventory
            .get(memory.slot)
            .is_some_and(|stack| !stack.is_empty() && stack.kind == memory.item);

        if !ctx.actor.offhand.is_totem() || !in_place {
            debug!(slot = %memory.slot, item = %memory.item, "dropping stale switch-back");
            self.switch_back = None;
            return None;
        }
        Some(ClickAction::swap_into_offhand(memory.slot))
    }

    fn report(
        &self,
        assessment: Assessment,
        outcome: EquipOutcome,
        switched_back: bool,
    ) -> OpportunityReport {
        OpportunityReport {
            policy: self.policy,
            assessment,
            outcome,
            switched_back,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_names_parse_case_insensitively() {
        assert_eq!(PolicyKind::parse("threat").unwrap(), PolicyKind::Threat);
        assert_eq!(PolicyKind::parse("Health_Gate").unwrap(), PolicyKind::HealthGate);
        assert_eq!(PolicyKind::HealthGate.to_string(), "health_gate");
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let err = PolicyKind::parse("berserk").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_POLICY");
        assert!(err.to_string().contains("berserk"));
    }

    #[test]
    fn health_gate_never_sends_directly() {
        let mut settings = Settings::default();
        settings.threat.send_directly = true;
        settings.threat.switch_delay_ms = 300;

        let config = PolicyKind::HealthGate.executor_config(&settings);
        assert!(!config.send_directly);
        assert_eq!(config.switch_delay_ms, 0);
        assert_eq!(PolicyKind::Threat.executor_config(&settings), settings.threat);
    }

    #[test]
    fn sphere_follows_initial_settings() {
        let module = OffhandModule::new(PolicyKind::Threat, Settings::default());
        assert!(!module.sphere().is_computed());

        let mut settings = Settings::default();
        settings.threat.health.predict_explosion_blocks = true;
        let module = OffhandModule::new(PolicyKind::Threat, settings);
        assert!(module.sphere().is_computed());
    }
}
