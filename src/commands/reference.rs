// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Reference profile management

use std::path::Path;

use serde::Serialize;

use super::{format_lines, profile_lines};
use crate::cli::args::{OutputFormat, ReferenceCommands};
use crate::config::Settings;
use crate::error::{AutoQualityError, Result};
use crate::hardware::ProfileProvider;
use crate::profile::Profile;
use crate::session::Session;

#[derive(Serialize)]
struct ReferenceOutput<'a> {
    reference: Option<&'a Profile>,
    captured_at: Option<&'a str>,
}

/// Execute a reference subcommand, saving changes to `settings_path`.
pub fn execute(
    command: &ReferenceCommands,
    settings: &mut Settings,
    settings_path: &Path,
    format: OutputFormat,
) -> Result<()> {
    match command {
        ReferenceCommands::Show => print!("{}", render_show(settings, format)?),
        ReferenceCommands::Set => {
            let provider = settings.provider();
            set_from_host(settings, &provider);
            settings.save_to(settings_path)?;
            println!("Reference set from this machine.");
        }
        ReferenceCommands::Clear => {
            settings.clear_reference();
            settings.save_to(settings_path)?;
            println!("Reference cleared.");
        }
        ReferenceCommands::Import { file } => {
            let reference = load_profile(file)?;
            settings.record_reference(reference);
            settings.save_to(settings_path)?;
            println!("Reference imported from {}.", file.display());
        }
        ReferenceCommands::Export { toml } => print!("{}", render_export(settings, *toml)?),
    }
    Ok(())
}

/// Record a fresh capture from `provider` as the reference.
pub fn set_from_host<P: ProfileProvider>(settings: &mut Settings, provider: P) -> Profile {
    let mut session = Session::new(provider);
    let reference = session.set_reference().clone();
    settings.record_reference(reference.clone());
    reference
}

/// Read a profile from a `.toml` or `.json` file and validate it.
pub fn load_profile(path: &Path) -> Result<Profile> {
    let content = std::fs::read_to_string(path)?;
    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let profile: Profile = if is_toml {
        toml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    profile.validate()?;
    tracing::debug!(path = %path.display(), "Loaded reference profile");
    Ok(profile)
}

pub fn render_show(settings: &Settings, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        let output = ReferenceOutput {
            reference: settings.reference_profile(),
            captured_at: settings.reference_captured_at.as_deref(),
        };
        let mut json = serde_json::to_string_pretty(&output)?;
        json.push('\n');
        return Ok(json);
    }

    let Some(reference) = settings.reference_profile() else {
        return Ok("No reference profile set.\n".to_string());
    };
    let mut output = String::from("\n=== Reference Profile ===\n\n");
    output.push_str(&format_lines(&profile_lines(reference)));
    if let Some(ref captured_at) = settings.reference_captured_at {
        output.push_str(&format!("\nRecorded {}\n", captured_at));
    }
    Ok(output)
}

/// Serialize the stored reference for use on another machine.
pub fn render_export(settings: &Settings, as_toml: bool) -> Result<String> {
    let reference = settings
        .reference_profile()
        .ok_or_else(|| AutoQualityError::Session("no reference profile is set".to_string()))?;
    settings.validate_reference()?;
    if as_toml {
        Ok(toml::to_string_pretty(reference)?)
    } else {
        let mut json = serde_json::to_string_pretty(reference)?;
        json.push('\n');
        Ok(json)
    }
}
