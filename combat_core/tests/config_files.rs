//! Loading combat configuration from disk

use combat_core::config::{CombatConfig, ConfigError};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("combat.toml");
    fs::write(
        &path,
        r#"
[multi_hit]
hp_table = [1.0, 0.5, 0.25]
hp_min_scalar = 0.2

[posture]
overkill_cap_fraction = 0.25

[hit_count]
set_bonus = 2
"#,
    )
    .unwrap();

    let config = CombatConfig::load_from_path(&path).unwrap();
    assert_eq!(config.multi_hit.hp_table, vec![1.0, 0.5, 0.25]);
    assert_eq!(config.multi_hit.hp_min_scalar, Some(0.2));
    assert_eq!(config.posture.overkill_cap_fraction, 0.25);
    assert_eq!(config.hit_count.set_bonus, 2.0);
    // Sections not in the file keep their shipped values
    assert_eq!(config.damage_reduction.max_fraction, 0.9);
}

#[test]
fn test_load_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("combat.json");
    fs::write(&path, r#"{ "damage_reduction": { "max_fraction": 0.75 } }"#).unwrap();

    let config = CombatConfig::load_from_path(&path).unwrap();
    assert_eq!(config.damage_reduction.max_fraction, 0.75);
    assert_eq!(config.posture.overkill_cap_fraction, 0.35);
}

#[test]
fn test_round_trip_through_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("combat.toml");
    let mut original = CombatConfig::default();
    original.hit_count.resonance_bonus = 1.0;
    fs::write(&path, toml::to_string(&original).unwrap()).unwrap();

    let loaded = CombatConfig::load_from_path(&path).unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    let err = CombatConfig::load_from_path(&path).unwrap_err();
    match err {
        ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected IO error, got {other:?}"),
    }
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("combat.yaml");
    fs::write(&path, "posture: {}").unwrap();
    let err = CombatConfig::load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
}

#[test]
fn test_invalid_values_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("combat.toml");
    fs::write(&path, "[posture]\noverkill_cap_fraction = -0.1\n").unwrap();
    let err = CombatConfig::load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
}
