//! Settings file round trips.

use linkplanner_settings::{Config, SettingsError};

#[test]
fn toml_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.fresnel.samples = 80;
    config.towers.default_frequency_ghz = 5.8;
    config.elevation.enabled = false;
    config.save_to_file(&path).unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn json_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let mut config = Config::default();
    config.map.zoom = 9;
    config.styles.link_selected_color = "#ff00ff".to_string();
    config.save_to_file(&path).unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn invalid_file_is_rejected_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[fresnel]\nsamples = 0\n").unwrap();

    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::InvalidSetting { .. })
    ));
}

#[test]
fn malformed_toml_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[fresnel\nsamples = ").unwrap();

    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::ParseToml { .. })
    ));
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_or_default(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn missing_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        Config::load_from_file(&dir.path().join("absent.json")),
        Err(SettingsError::Read { .. })
    ));
}
