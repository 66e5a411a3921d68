// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use autoquality::config::Settings;
use autoquality::hardware::HostOverrides;
use autoquality::profile::{DeviceClass, GraphicsApi, Profile};
use autoquality::scoring::WeightConfiguration;
use tempfile::TempDir;

#[test]
fn test_settings_default_values() {
    let settings = Settings::default();

    assert_eq!(settings.weights.desktop_weight(), 1.0);
    assert_eq!(settings.weights.console_weight(), 1.0);
    assert_eq!(settings.weights.handheld_weight(), 0.7);
    assert_eq!(settings.weights.ignore_cores_above(), 2);
    assert_eq!(settings.weights.gpu_multithread_penalty(), 0.5);
    assert_eq!(settings.weights.compute_penalty(), 0.5);
    assert_eq!(settings.weights.image_effect_penalty(), 0.25);
    assert_eq!(settings.weights.shadow_penalty(), 0.9);
    assert!(settings.reference.is_none());
    assert!(!settings.use_extended_profile);
}

#[test]
fn test_settings_serialization_shape() {
    let settings = Settings::default();
    let value = serde_json::to_value(&settings).unwrap();

    assert!(value["weights"].is_object());
    assert!(value["reference"].is_null());
    assert_eq!(value["host_overrides"], serde_json::json!({}));
    assert_eq!(value["use_extended_profile"], false);
}

#[test]
fn test_settings_round_trip_through_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");

    let mut settings = Settings::default();
    settings.weights.set("compute_penalty", "0.3").unwrap();
    settings.record_reference(Profile {
        device_class: DeviceClass::Console,
        graphics_api: GraphicsApi::XboxOne,
        gpu_memory_mb: 5120,
        ..Profile::default()
    });
    settings.host_overrides = HostOverrides {
        gpu_shader_level: Some(50),
        graphics_api: Some(GraphicsApi::Vulkan),
        ..HostOverrides::default()
    };
    settings.save_to(&path).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded, settings);
    assert!(loaded.validate().is_ok());
}

#[test]
fn test_settings_partial_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    std::fs::write(&path, r#"{"use_extended_profile": true}"#).unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert!(settings.use_extended_profile);
    assert_eq!(settings.weights, WeightConfiguration::default());
}

#[test]
fn test_settings_hand_edited_threshold() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    std::fs::write(&path, r#"{"weights": {"ignore_cores_above": 6.0}}"#).unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.weights.ignore_cores_above(), 6);
}

#[test]
fn test_settings_out_of_range_threshold_falls_back() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    std::fs::write(&path, r#"{"weights": {"ignore_cores_above": 64}}"#).unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.weights.ignore_cores_above(), 2);
}

#[test]
fn test_settings_fractional_threshold_falls_back() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{"weights": {"ignore_cores_above": 2.5, "shadow_penalty": 0.4}}"#,
    )
    .unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.weights.ignore_cores_above(), 2);
    assert_eq!(settings.weights.shadow_penalty(), 0.4);
}

#[test]
fn test_settings_non_numeric_weights_fall_back() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{"weights": {"handheld_weight": "high", "compute_penalty": true, "ignore_cores_above": "4", "console_weight": 0.8}}"#,
    )
    .unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.weights.handheld_weight(), 0.7);
    assert_eq!(settings.weights.compute_penalty(), 0.5);
    assert_eq!(settings.weights.ignore_cores_above(), 2);
    assert_eq!(settings.weights.console_weight(), 0.8);
}

#[test]
fn test_settings_invalid_stored_reference_fails_validation() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    std::fs::write(&path, r#"{"reference": {"multi_gpu_scale_factor": 9.0}}"#).unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert!(settings.validate().is_err());
}

#[test]
fn test_autoquality_home_ends_with_dir() {
    // Only meaningful when the environment does not override the location
    if std::env::var("AUTOQUALITY_HOME").is_err() {
        assert!(Settings::autoquality_home().ends_with(".autoquality"));
    }
    assert!(Settings::default_path().ends_with("settings.json"));
}
