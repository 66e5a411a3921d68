// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for autoquality.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// autoquality - compare this machine against a reference hardware profile
#[derive(Parser, Debug)]
#[command(name = "autoquality")]
#[command(
    version,
    about = "Compare this machine against a reference hardware profile"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Settings file path (defaults to ~/.autoquality/settings.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score this machine against the stored reference (default)
    Score,

    /// Show the detected host profile
    #[command(alias = "hw")]
    Profile(ProfileArgs),

    /// Manage the stored reference profile
    #[command(alias = "ref")]
    Reference(ReferenceArgs),

    /// Show or change scoring weights
    Weights(WeightsArgs),
}

/// Arguments for the profile subcommand
#[derive(clap::Args, Debug, Default)]
pub struct ProfileArgs {
    /// Include descriptive attributes (model, vendor, feature flags)
    #[arg(short, long)]
    pub extended: bool,

    /// Print as TOML instead of the selected format
    #[arg(long)]
    pub toml: bool,
}

/// Arguments for the reference subcommand
#[derive(clap::Args, Debug)]
pub struct ReferenceArgs {
    #[command(subcommand)]
    pub command: ReferenceCommands,
}

#[derive(Subcommand, Debug)]
pub enum ReferenceCommands {
    /// Show the stored reference
    Show,

    /// Record this machine as the reference
    Set,

    /// Remove the stored reference
    Clear,

    /// Load the reference from a .json or .toml file
    Import {
        /// Profile file
        file: PathBuf,
    },

    /// Print the stored reference for sharing
    Export {
        /// Print as TOML instead of JSON
        #[arg(long)]
        toml: bool,
    },
}

/// Arguments for the weights subcommand
#[derive(clap::Args, Debug)]
pub struct WeightsArgs {
    #[command(subcommand)]
    pub command: Option<WeightsCommands>,
}

#[derive(Subcommand, Debug)]
pub enum WeightsCommands {
    /// Show current weights (default)
    Show,

    /// Set one weight
    Set {
        /// Weight name (e.g. handheld_weight)
        key: String,

        /// New value
        value: String,
    },

    /// Restore default weights
    Reset,
}

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,

    /// JSON output
    Json,
}
