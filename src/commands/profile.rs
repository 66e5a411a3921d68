// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Host profile command

use super::{extended_lines, format_lines, profile_lines};
use crate::cli::args::{OutputFormat, ProfileArgs};
use crate::config::Settings;
use crate::error::Result;
use crate::hardware::ProfileProvider;
use crate::profile::ExtendedProfile;

/// Execute the profile command
pub fn execute(args: &ProfileArgs, settings: &Settings, format: OutputFormat) -> Result<()> {
    let captured = settings.provider().capture();
    print!("{}", render(&captured, args, format)?);
    Ok(())
}

/// Render a captured profile in the requested shape.
pub fn render(
    profile: &ExtendedProfile,
    args: &ProfileArgs,
    format: OutputFormat,
) -> Result<String> {
    if args.toml {
        return Ok(if args.extended {
            toml::to_string_pretty(profile)?
        } else {
            toml::to_string_pretty(profile.core())?
        });
    }

    match format {
        OutputFormat::Json => {
            let mut json = if args.extended {
                serde_json::to_string_pretty(profile)?
            } else {
                serde_json::to_string_pretty(profile.core())?
            };
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => {
            let mut lines = profile_lines(profile.core());
            if args.extended {
                lines.extend(extended_lines(profile));
            }

            let mut output = String::from("\n=== Host Capability Profile ===\n\n");
            output.push_str(&format_lines(&lines));
            if profile.core().has_unknowns() {
                output.push_str(
                    "\nSome attributes are unknown. Set them under \"host_overrides\" \
                     in the settings file to enable scoring.\n",
                );
            }
            Ok(output)
        }
    }
}
