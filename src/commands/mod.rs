// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Subcommand implementations
//!
//! Each command renders its output to a `String` first so the text and JSON
//! shapes can be tested without a terminal.

pub mod profile;
pub mod reference;
pub mod score;
pub mod weights;

use std::ffi::OsStr;
use std::io::{self, IsTerminal};

use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    ExecutableCommand,
};

use crate::cli::Commands;
use crate::config::Settings;
use crate::error::Result;
use crate::profile::{known, ExtendedProfile, Profile};

/// Validate the loaded settings before running `command`.
///
/// Reference subcommands replace or display the stored reference, so a broken
/// one must not lock the user out of repairing it. Export checks it itself.
pub fn check_settings(command: Option<&Commands>, settings: &Settings) -> Result<()> {
    match command {
        Some(Commands::Reference(_)) => settings.host_overrides.validate(),
        _ => settings.validate(),
    }
}

/// `name: value` rows describing the scoring attributes
pub(crate) fn profile_lines(profile: &Profile) -> Vec<(&'static str, String)> {
    vec![
        ("Device class", profile.device_class.to_string()),
        ("Graphics API", profile.graphics_api.to_string()),
        ("GPU memory", measurement(profile.gpu_memory_mb, " MB")),
        (
            "GPU multithreading",
            yes_no(profile.gpu_supports_multithreading),
        ),
        ("Shader level", measurement(profile.gpu_shader_level, "")),
        (
            "Max texture size",
            measurement(profile.gpu_max_texture_size, " px"),
        ),
        ("Logical cores", measurement(profile.cpu_logical_core_count, "")),
        ("CPU frequency", measurement(profile.cpu_frequency_mhz, " MHz")),
        ("System memory", measurement(profile.system_memory_mb, " MB")),
        ("Compute shaders", yes_no(profile.supports_compute_shaders)),
        ("Image effects", yes_no(profile.supports_image_effects)),
        ("Shadows", yes_no(profile.supports_shadows)),
        (
            "Multi-GPU scale",
            format!("{:.2}", profile.multi_gpu_scale_factor),
        ),
    ]
}

/// Rows for the descriptive attributes of an extended profile
pub(crate) fn extended_lines(profile: &ExtendedProfile) -> Vec<(&'static str, String)> {
    vec![
        ("Device model", text_or_unknown(&profile.device_model)),
        ("Device name", text_or_unknown(&profile.device_name)),
        ("Operating system", text_or_unknown(&profile.operating_system)),
        ("Processor", text_or_unknown(&profile.processor_type)),
        ("GPU", text_or_unknown(&profile.gpu_device_name)),
        ("GPU vendor", text_or_unknown(&profile.gpu_vendor)),
        ("GPU version", text_or_unknown(&profile.gpu_version)),
        ("NPOT textures", format!("{:?}", profile.npot_support)),
        (
            "Render targets",
            measurement(profile.supported_render_target_count, ""),
        ),
        (
            "Optional features",
            format!("{} of 11", profile.supported_feature_count()),
        ),
    ]
}

/// Align rows into a block of text
pub(crate) fn format_lines(lines: &[(&'static str, String)]) -> String {
    let width = lines.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    let mut output = String::new();
    for (name, value) in lines {
        let label = format!("{}:", name);
        output.push_str(&format!("{:<width$} {}\n", label, value, width = width + 1));
    }
    output
}

/// Print `text` in `color`, then reset. Plain when piped or `NO_COLOR` is set.
pub(crate) fn print_colored(color: Color, text: &str) -> Result<()> {
    let mut stdout = io::stdout();
    let no_color = std::env::var_os("NO_COLOR");
    if !color_enabled(stdout.is_terminal(), no_color.as_deref()) {
        print!("{}", text);
        return Ok(());
    }
    stdout.execute(SetForegroundColor(color))?;
    print!("{}", text);
    stdout.execute(ResetColor)?;
    Ok(())
}

fn color_enabled(stdout_is_terminal: bool, no_color: Option<&OsStr>) -> bool {
    stdout_is_terminal && no_color.map_or(true, OsStr::is_empty)
}

fn measurement(value: i32, unit: &str) -> String {
    match known(value) {
        Some(value) => format!("{}{}", value, unit),
        None => "unknown".to_string(),
    }
}

fn yes_no(value: bool) -> String {
    let text = if value { "yes" } else { "no" };
    text.to_string()
}

fn text_or_unknown(value: &str) -> String {
    if value.is_empty() {
        "unknown".to_string()
    } else {
        value.to_string()
    }
}
