// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! autoquality - compare this machine against a reference hardware profile
//!
//! Entry point for the autoquality CLI application.

use clap::Parser;

use autoquality::cli::{Cli, Commands};
use autoquality::commands;
use autoquality::config::Settings;
use autoquality::error::Result;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // `-v` shows scoring and detection diagnostics; `RUST_LOG` still applies.
    if cli.verbose > 0 {
        let directive = if cli.verbose > 1 {
            "autoquality=trace"
        } else {
            "autoquality=debug"
        };
        if let Ok(parsed) = directive.parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Load settings
    let settings_path = cli.config.clone().unwrap_or_else(Settings::default_path);
    let mut settings = Settings::load_from(&settings_path)?;
    commands::check_settings(cli.command.as_ref(), &settings)?;

    // Dispatch to appropriate command
    match cli.command {
        None | Some(Commands::Score) => {
            commands::score::execute(&settings, cli.format)?;
        }
        Some(Commands::Profile(args)) => {
            commands::profile::execute(&args, &settings, cli.format)?;
        }
        Some(Commands::Reference(args)) => {
            commands::reference::execute(
                &args.command,
                &mut settings,
                &settings_path,
                cli.format,
            )?;
        }
        Some(Commands::Weights(args)) => {
            commands::weights::execute(
                args.command.as_ref(),
                &mut settings,
                &settings_path,
                cli.format,
            )?;
        }
    }

    Ok(())
}
