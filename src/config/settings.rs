// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for autoquality
//!
//! Handles loading and saving settings from ~/.autoquality/settings.json

use serde::{Deserialize, Serialize};

use crate::hardware::HostOverrides;
use crate::profile::Profile;
use crate::scoring::WeightConfiguration;

mod io;
mod migration;
mod validation;

/// Main settings structure, stored in ~/.autoquality/settings.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Scoring coefficients; out-of-range values fall back to defaults on load
    #[serde(default)]
    pub weights: WeightConfiguration,

    /// Stored reference profile. Serialized as `null` when cleared so a
    /// merging save removes the previous one.
    #[serde(default)]
    pub reference: Option<Profile>,

    /// When the reference was recorded (RFC 3339)
    #[serde(default)]
    pub reference_captured_at: Option<String>,

    /// Host attributes the OS cannot report
    #[serde(default)]
    pub host_overrides: HostOverrides,

    /// Also capture the extended profile on initialize
    #[serde(default)]
    pub use_extended_profile: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{DeviceClass, GraphicsApi, UNKNOWN};
    use tempfile::TempDir;

    fn sample_reference() -> Profile {
        Profile {
            device_class: DeviceClass::Desktop,
            graphics_api: GraphicsApi::Vulkan,
            gpu_memory_mb: 4096,
            gpu_shader_level: 50,
            gpu_max_texture_size: 16384,
            cpu_logical_core_count: 8,
            cpu_frequency_mhz: 3200,
            system_memory_mb: 16384,
            supports_shadows: true,
            ..Profile::default()
        }
    }

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.weights, WeightConfiguration::default());
        assert!(settings.reference.is_none());
        assert!(settings.reference_captured_at.is_none());
        assert!(settings.host_overrides.is_empty());
        assert!(!settings.use_extended_profile);
    }

    #[test]
    fn test_settings_load_from_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_settings_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test_settings.json");

        let mut settings = Settings::default();
        settings.weights.set("handheld_weight", "0.5").unwrap();
        settings.record_reference(sample_reference());
        settings.use_extended_profile = true;

        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.weights.handheld_weight(), 0.5);
        assert_eq!(loaded.reference_profile(), Some(&sample_reference()));
    }

    #[test]
    fn test_settings_save_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir
            .path()
            .join("nested")
            .join("dir")
            .join("settings.json");

        let settings = Settings::default();
        settings.save_to(&path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_save_preserves_unknown_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"editor_notes": "keep me", "weights": {"custom": 3}}"#,
        )
        .unwrap();

        Settings::default().save_to(&path).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["editor_notes"], "keep me");
        assert_eq!(raw["weights"]["custom"], 3);
        assert_eq!(raw["weights"]["handheld_weight"], 0.7);
    }

    #[test]
    fn test_merging_save_clears_reference() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");

        let mut settings = Settings::default();
        settings.record_reference(sample_reference());
        settings.save_to(&path).unwrap();

        settings.clear_reference();
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert!(loaded.reference.is_none());
        assert!(loaded.reference_captured_at.is_none());
    }

    #[test]
    fn test_merging_save_replaces_host_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");

        let mut settings = Settings::default();
        settings.host_overrides.gpu_memory_mb = Some(4096);
        settings.host_overrides.gpu_shader_level = Some(45);
        settings.save_to(&path).unwrap();

        settings.host_overrides.gpu_shader_level = None;
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.host_overrides.gpu_memory_mb, Some(4096));
        assert_eq!(loaded.host_overrides.gpu_shader_level, None);
    }

    #[test]
    fn test_load_repairs_out_of_range_weights() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"weights": {"handheld_weight": 4.0, "shadow_penalty": 0.5}}"#,
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.weights.handheld_weight(), 0.7);
        assert_eq!(settings.weights.shadow_penalty(), 0.5);
    }

    #[test]
    fn test_load_partial_reference_uses_sentinels() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, r#"{"reference": {"gpu_memory_mb": 2048}}"#).unwrap();

        let settings = Settings::load_from(&path).unwrap();
        let reference = settings.reference_profile().unwrap();
        assert_eq!(reference.gpu_memory_mb, 2048);
        assert_eq!(reference.cpu_frequency_mhz, UNKNOWN);
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(Settings::load_from(&path).is_err());
    }

    #[test]
    fn test_default_path() {
        let path = Settings::default_path();
        assert!(path.ends_with("settings.json"));
    }
}
