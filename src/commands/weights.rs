// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Scoring weight management

use std::path::Path;

use crate::cli::args::{OutputFormat, WeightsCommands};
use crate::config::Settings;
use crate::error::Result;
use crate::scoring::WeightConfiguration;

/// Execute a weights subcommand, saving changes to `settings_path`.
pub fn execute(
    command: Option<&WeightsCommands>,
    settings: &mut Settings,
    settings_path: &Path,
    format: OutputFormat,
) -> Result<()> {
    match command {
        None | Some(WeightsCommands::Show) => {}
        Some(WeightsCommands::Set { key, value }) => {
            settings.weights.set(key, value)?;
            settings.save_to(settings_path)?;
            tracing::info!(key = %key, value = %value, "Weight updated");
        }
        Some(WeightsCommands::Reset) => {
            settings.weights = WeightConfiguration::default();
            settings.save_to(settings_path)?;
            tracing::info!("Weights reset to defaults");
        }
    }

    print!("{}", render(&settings.weights, format)?);
    Ok(())
}

pub fn render(weights: &WeightConfiguration, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(weights)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => {
            let entries = weights.entries();
            let width = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
            Ok(entries
                .iter()
                .map(|(key, value)| format!("{:<width$}  {}\n", key, value, width = width))
                .collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_text_lists_every_key() {
        let text = render(&WeightConfiguration::default(), OutputFormat::Text).unwrap();
        for key in WeightConfiguration::KEYS {
            assert!(text.contains(key), "missing {}", key);
        }
        assert!(text.contains("0.7"));
    }

    #[test]
    fn test_render_json_round_trip() {
        let json = render(&WeightConfiguration::default(), OutputFormat::Json).unwrap();
        let parsed: WeightConfiguration = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, WeightConfiguration::default());
    }

    #[test]
    fn test_set_persists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        let mut settings = Settings::default();

        let set = WeightsCommands::Set {
            key: "ignore_cores_above".to_string(),
            value: "4".to_string(),
        };
        execute(Some(&set), &mut settings, &path, OutputFormat::Text).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.weights.ignore_cores_above(), 4);
    }

    #[test]
    fn test_set_rejects_out_of_range() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        let mut settings = Settings::default();

        let set = WeightsCommands::Set {
            key: "shadow_penalty".to_string(),
            value: "1.5".to_string(),
        };
        assert!(execute(Some(&set), &mut settings, &path, OutputFormat::Text).is_err());
        assert_eq!(settings.weights, WeightConfiguration::default());
        assert!(!path.exists());
    }

    #[test]
    fn test_reset() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        let mut settings = Settings::default();
        settings.weights.set("console_weight", "0.2").unwrap();

        execute(
            Some(&WeightsCommands::Reset),
            &mut settings,
            &path,
            OutputFormat::Json,
        )
        .unwrap();
        assert_eq!(settings.weights, WeightConfiguration::default());
        assert_eq!(
            Settings::load_from(&path).unwrap().weights,
            WeightConfiguration::default()
        );
    }
}
