use std::fs;

use tempfile::TempDir;
use totem_content::{ConfigLoader, ScenarioLoader};
use totem_core::{BlockKind, BlockPos, InventorySlot, WorldOracle};

#[test]
fn loads_settings_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("totem.toml");
    fs::write(
        &path,
        "[threat]\nsend_directly = true\n\n[threat.health.safety]\nsafe_health = 6\n",
    )
    .unwrap();

    let settings = ConfigLoader::load(&path).unwrap();
    assert!(settings.threat.send_directly);
    assert_eq!(settings.threat.health.safety.safe_health, 6);
}

#[test]
fn reports_path_of_invalid_settings() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    fs::write(&path, "[threat.health]\nhealth_threshold = 40\n").unwrap();

    let message = ConfigLoader::load(&path).unwrap_err().to_string();
    assert!(message.contains("broken.toml"), "{message}");
    assert!(message.contains("health.health_threshold"), "{message}");
}

#[test]
fn missing_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = ConfigLoader::load(&temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read file"));
}

#[test]
fn unnamed_scenario_takes_file_stem() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("obsidian_hole.ron");
    fs::write(
        &path,
        r#"(
            actor: (position: (0.5, 64.0, 0.5), health: 12.0),
            inventory: [(Hotbar(8), TotemOfUndying, 1)],
            blocks: [
                (0, 63, 0, Obsidian),
                (1, 64, 0, Obsidian),
                (-1, 64, 0, Obsidian),
                (0, 64, 1, Obsidian),
                (0, 64, -1, Obsidian),
            ],
        )"#,
    )
    .unwrap();

    let scenario = ScenarioLoader::load(&path).unwrap();
    assert_eq!(scenario.name, "obsidian_hole");
    assert_eq!(
        scenario.world.block_state(BlockPos::new(0, 63, 0)).kind,
        BlockKind::Obsidian
    );
    assert_eq!(
        scenario.inventory.find_slot(|stack| stack.is_totem()),
        Some(InventorySlot::Hotbar(8))
    );
}
