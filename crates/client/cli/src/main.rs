//! Offline simulator: evaluates one scenario and prints what the module would do.
mod config;
mod logging;

use anyhow::{Context, Result};
use config::CliConfig;
use serde::Serialize;
use totem_content::{ConfigLoader, Scenario, ScenarioLoader};
use totem_core::{Env, VanillaPhysics};
use totem_runtime::{
    InventoryRequest, InventoryRequests, OffhandModule, Opportunity, OpportunityReport, Settings,
};

/// JSON document written to stdout.
#[derive(Serialize)]
struct SimulationOutput<'a> {
    scenario: &'a str,
    report: OpportunityReport,
    requests: &'a [InventoryRequest],
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env()?;
    let _guard = logging::setup_logging(config.session_id.as_deref(), config.log_dir.as_deref())?;

    let settings = match &config.settings_path {
        Some(path) => Settings::from(ConfigLoader::load(path)?),
        None => Settings::default(),
    };
    let scenario_path = config
        .scenario_path
        .as_deref()
        .context("TOTEM_SCENARIO must point at a scenario file")?;
    let scenario = ScenarioLoader::load(scenario_path)?;

    tracing::info!(
        scenario = %scenario.name,
        policy = %config.policy,
        "evaluating scenario"
    );

    let mut module = OffhandModule::new(config.policy, settings);
    let mut requests = InventoryRequests::new();
    let report = evaluate(&mut module, &scenario, &mut requests);

    let output = SimulationOutput {
        scenario: &scenario.name,
        report,
        requests: requests.requests(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

/// Runs a single inventory opportunity against the scenario's frozen world.
fn evaluate(
    module: &mut OffhandModule,
    scenario: &Scenario,
    requests: &mut InventoryRequests,
) -> OpportunityReport {
    let physics = VanillaPhysics::new(scenario.world.difficulty);
    let env = Env::new(&scenario.world, &physics);
    let ctx = Opportunity::new(
        &scenario.actor,
        &scenario.inventory,
        env.as_totem_env(),
        scenario.now,
    );
    module.on_inventory_opportunity(ctx, requests)
}

#[cfg(test)]
mod tests {
    use totem_core::{EquipOutcome, ItemKind, Reason};
    use totem_runtime::PolicyKind;

    use super::*;

    const LOW_HEALTH: &str = r#"(
        actor: (position: (0.5, 64.0, 0.5), health: 9.0, offhand: GoldenApple),
        inventory: [(Hotbar(2), TotemOfUndying, 1)],
        floors: [(63, 2, Solid)],
    )"#;

    #[test]
    fn low_health_scenario_requests_swap() {
        let scenario = ScenarioLoader::parse(LOW_HEALTH).unwrap();
        let mut module = OffhandModule::new(PolicyKind::Threat, Settings::default());
        let mut requests = InventoryRequests::new();

        let report = evaluate(&mut module, &scenario, &mut requests);

        assert_eq!(report.assessment.reason, Reason::BelowThreshold);
        assert!(matches!(report.outcome, EquipOutcome::Scheduled(_)));
        assert_eq!(requests.requests().len(), 1);
        assert_eq!(
            module.pending_switch_back().map(|memory| memory.item),
            Some(ItemKind::GoldenApple)
        );
    }

    #[test]
    fn output_serializes_to_json() {
        let scenario = ScenarioLoader::parse(LOW_HEALTH).unwrap();
        let mut module = OffhandModule::new(PolicyKind::Threat, Settings::default());
        let mut requests = InventoryRequests::new();
        let report = evaluate(&mut module, &scenario, &mut requests);

        let output = SimulationOutput {
            scenario: "low_health",
            report,
            requests: requests.requests(),
        };
        let json: serde_json::Value = serde_json::to_value(&output).unwrap();

        assert_eq!(json["scenario"], "low_health");
        assert_eq!(json["report"]["policy"], "threat");
        assert_eq!(json["report"]["assessment"]["verdict"], true);
        assert_eq!(json["requests"].as_array().map(Vec::len), Some(1));
    }
}
