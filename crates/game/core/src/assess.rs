//! Equip policies: decide whether a totem belongs in the off-hand right now.
//!
//! Policies are pure: the same snapshot, configuration and world always yield
//! the same [`Assessment`]. Anything that has to be remembered between
//! evaluations (the item to switch back to, the last switch time) belongs to
//! the caller.

use crate::config::{HealthGateConfig, ThreatConfig};
use crate::env::{PhysicsOracle, TotemEnv, WorldOracle};
use crate::hole::{self, Shelter};
use crate::predict::{
    DamageEstimate, max_block_explosion_damage, max_entity_explosion_damage,
    predicted_fall_damage,
};
use crate::sphere::SpatialOffsetSet;
use crate::state::ActorSnapshot;

/// Everything a policy may read during one evaluation.
#[derive(Clone, Copy)]
pub struct EvaluationContext<'a> {
    pub actor: &'a ActorSnapshot,
    pub env: TotemEnv<'a>,
    /// Block scan offsets; `None` until the settings layer first computed them.
    pub sphere: Option<&'a SpatialOffsetSet>,
}

impl<'a> EvaluationContext<'a> {
    pub fn new(
        actor: &'a ActorSnapshot,
        env: TotemEnv<'a>,
        sphere: Option<&'a SpatialOffsetSet>,
    ) -> Self {
        Self { actor, env, sphere }
    }
}

/// Why a policy reached its verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Reason {
    /// The policy itself is switched off.
    Disabled,
    /// Creative, spectator or dead.
    Exempt,
    /// Health-based switching is off, so a totem is always wanted.
    HealthCheckDisabled,
    MissingArmor,
    /// Predicted damage would kill the actor.
    LethalDamage,
    /// Healthy enough and sheltered, so the current off-hand item may stay.
    Sheltered(Shelter),
    BelowThreshold,
    AboveThreshold,
}

/// Per-source damage predicted for one evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageBreakdown {
    pub entities: DamageEstimate,
    pub blocks: DamageEstimate,
    pub fall: DamageEstimate,
}

impl DamageBreakdown {
    /// Explosions do not stack (only the worst one counts), fall damage does.
    pub fn calculated(&self) -> DamageEstimate {
        self.entities.max(self.blocks) + self.fall
    }
}

/// Verdict plus the data that produced it, for logging and tests.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assessment {
    pub verdict: bool,
    pub reason: Reason,
    pub health: f32,
    /// Only filled when the evaluation got as far as predicting damage.
    pub damage: Option<DamageBreakdown>,
}

impl Assessment {
    fn decided(verdict: bool, reason: Reason, actor: &ActorSnapshot) -> Self {
        Self {
            verdict,
            reason,
            health: actor.health,
            damage: None,
        }
    }

    fn with_damage(mut self, damage: DamageBreakdown) -> Self {
        self.damage = Some(damage);
        self
    }
}

/// A rule deciding whether a totem should be in the off-hand.
pub trait EquipPolicy: Send + Sync {
    /// Human-readable name used in logs.
    fn name(&self) -> &'static str;

    fn assess(&self, ctx: &EvaluationContext<'_>) -> Assessment;

    fn should_equip(&self, ctx: &EvaluationContext<'_>) -> bool {
        self.assess(ctx).verdict
    }

    /// Whether the caller should restore the previous off-hand item once the verdict clears.
    fn switch_back(&self) -> bool {
        false
    }
}

/// Damage-predicting policy with safety-hole and missing-armor overrides.
///
/// # Precedence
///
/// ```text
/// 0. totem toggle off, or creative / spectator / dead      → false
/// 1. health switching off                                   → true
/// 2. missing_armor and any armor slot empty                 → true
/// 3. calculated = max(entity, block) + fall
/// 4. !subtract_calculated_damage and health - calculated <= 0 → true
/// 5. safety on, health > safe_health, burrowed or in a hole → false
/// 6. health <= health_threshold
/// ```
///
/// `subtract_calculated_damage` only selects whether step 4 runs; the final
/// threshold comparison always uses the raw health.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ThreatAssessor {
    config: ThreatConfig,
}

impl ThreatAssessor {
    pub fn new(config: ThreatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ThreatConfig {
        &self.config
    }

    /// Runs the three predictors.
    pub fn predict_damage(
        &self,
        actor: &ActorSnapshot,
        world: &(impl WorldOracle + ?Sized),
        physics: &(impl PhysicsOracle + ?Sized),
        sphere: Option<&SpatialOffsetSet>,
    ) -> DamageBreakdown {
        let health = &self.config.health;
        DamageBreakdown {
            entities: max_entity_explosion_damage(actor, health, world, physics),
            blocks: max_block_explosion_damage(actor, health, world, physics, sphere),
            fall: predicted_fall_damage(actor, &self.config, world, physics),
        }
    }
}

impl EquipPolicy for ThreatAssessor {
    fn name(&self) -> &'static str {
        "threat"
    }

    fn assess(&self, ctx: &EvaluationContext<'_>) -> Assessment {
        let actor = ctx.actor;
        if !self.config.enabled {
            return Assessment::decided(false, Reason::Disabled, actor);
        }
        if actor.is_exempt() {
            return Assessment::decided(false, Reason::Exempt, actor);
        }

        let health = &self.config.health;
        if !health.enabled {
            return Assessment::decided(true, Reason::HealthCheckDisabled, actor);
        }

        if health.missing_armor && actor.has_missing_armor() {
            return Assessment::decided(true, Reason::MissingArmor, actor);
        }

        let world = ctx.env.world();
        let damage = self.predict_damage(actor, world, ctx.env.physics(), ctx.sphere);

        if !health.subtract_calculated_damage && actor.health - damage.calculated() <= 0.0 {
            return Assessment::decided(true, Reason::LethalDamage, actor).with_damage(damage);
        }

        let safety_operating =
            health.safety.enabled && actor.health > health.safety.safe_health as f32;
        if safety_operating {
            if let Some(shelter) = hole::shelter(actor, world) {
                return Assessment::decided(false, Reason::Sheltered(shelter), actor)
                    .with_damage(damage);
            }
        }

        let (verdict, reason) = if actor.health <= health.health_threshold as f32 {
            (true, Reason::BelowThreshold)
        } else {
            (false, Reason::AboveThreshold)
        };
        Assessment::decided(verdict, reason, actor).with_damage(damage)
    }

    fn switch_back(&self) -> bool {
        self.config.health.enabled && self.config.health.switch_back
    }
}

/// Stand-alone auto-totem rule: equip unless comfortably above a target health.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct HealthGate {
    config: HealthGateConfig,
}

impl HealthGate {
    pub fn new(config: HealthGateConfig) -> Self {
        Self { config }
    }
}

impl EquipPolicy for HealthGate {
    fn name(&self) -> &'static str {
        "health_gate"
    }

    fn assess(&self, ctx: &EvaluationContext<'_>) -> Assessment {
        let actor = ctx.actor;
        if actor.is_exempt() {
            return Assessment::decided(false, Reason::Exempt, actor);
        }
        if !self.config.enabled {
            return Assessment::decided(true, Reason::HealthCheckDisabled, actor);
        }
        if actor.health > self.config.target_health as f32 {
            Assessment::decided(false, Reason::AboveThreshold, actor)
        } else {
            Assessment::decided(true, Reason::BelowThreshold, actor)
        }
    }
}

/// One-shot form of [`ThreatAssessor`] for callers that hold no policy object.
pub fn should_equip_protective_item(
    actor: &ActorSnapshot,
    config: &ThreatConfig,
    env: TotemEnv<'_>,
    sphere: Option<&SpatialOffsetSet>,
) -> bool {
    ThreatAssessor::new(*config).should_equip(&EvaluationContext::new(actor, env, sphere))
}
