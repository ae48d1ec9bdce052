//! File round trips for placement settings.

use landmark_config::{ConfigError, Nudge, PlacementConfig};

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = PlacementConfig::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, PlacementConfig::default());
}

#[test]
fn save_then_load_preserves_nudges() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("placement.toml");

    let mut config = PlacementConfig {
        altitude_offset_m: 0.75,
        model_scale_y: 1.25,
        ..Default::default()
    };
    config.nudge(Nudge::Up);
    config.nudge(Nudge::Right);
    config.save_to(&path).unwrap();

    let loaded = PlacementConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn invalid_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("placement.toml");
    std::fs::write(&path, "length_scale = -1.0\n").unwrap();

    let err = PlacementConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().starts_with("invalid placement config"));
}
