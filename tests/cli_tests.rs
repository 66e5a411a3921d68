// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use autoquality::cli::{Cli, Commands, OutputFormat, ReferenceCommands, WeightsCommands};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_no_command() {
    let cli = Cli::try_parse_from(["autoquality"]).expect("Valid command parsing");
    assert!(cli.command.is_none());
    assert_eq!(cli.format, OutputFormat::Text);
}

#[test]
fn test_parse_score_command() {
    let cli = Cli::try_parse_from(["autoquality", "score"]).expect("Valid command parsing");
    assert!(matches!(cli.command, Some(Commands::Score)));
}

#[test]
fn test_parse_profile_toml() {
    let cli = Cli::try_parse_from(["autoquality", "profile", "--extended", "--toml"])
        .expect("Valid command parsing");
    if let Some(Commands::Profile(args)) = cli.command {
        assert!(args.extended);
        assert!(args.toml);
    } else {
        panic!("Expected Profile command");
    }
}

#[test]
fn test_parse_reference_import() {
    let cli = Cli::try_parse_from(["autoquality", "reference", "import", "ref.toml"])
        .expect("Valid command parsing");
    if let Some(Commands::Reference(args)) = cli.command {
        match args.command {
            ReferenceCommands::Import { file } => assert_eq!(file, PathBuf::from("ref.toml")),
            other => panic!("Expected Import, got {:?}", other),
        }
    } else {
        panic!("Expected Reference command");
    }
}

#[test]
fn test_parse_reference_export_toml() {
    let cli = Cli::try_parse_from(["autoquality", "ref", "export", "--toml"])
        .expect("Valid command parsing");
    assert!(matches!(
        cli.command,
        Some(Commands::Reference(ref args))
            if matches!(args.command, ReferenceCommands::Export { toml: true })
    ));
}

#[test]
fn test_parse_reference_set_and_clear() {
    for (name, expect_set) in [("set", true), ("clear", false)] {
        let cli = Cli::try_parse_from(["autoquality", "reference", name])
            .expect("Valid command parsing");
        let Some(Commands::Reference(args)) = cli.command else {
            panic!("Expected Reference command");
        };
        if expect_set {
            assert!(matches!(args.command, ReferenceCommands::Set));
        } else {
            assert!(matches!(args.command, ReferenceCommands::Clear));
        }
    }
}

#[test]
fn test_parse_weights_without_subcommand() {
    let cli = Cli::try_parse_from(["autoquality", "weights"]).expect("Valid command parsing");
    if let Some(Commands::Weights(args)) = cli.command {
        assert!(args.command.is_none());
    } else {
        panic!("Expected Weights command");
    }
}

#[test]
fn test_parse_weights_reset() {
    let cli =
        Cli::try_parse_from(["autoquality", "weights", "reset"]).expect("Valid command parsing");
    assert!(matches!(
        cli.command,
        Some(Commands::Weights(ref args)) if matches!(args.command, Some(WeightsCommands::Reset))
    ));
}

#[test]
fn test_parse_weights_set_requires_value() {
    assert!(Cli::try_parse_from(["autoquality", "weights", "set", "shadow_penalty"]).is_err());
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "autoquality",
        "--config",
        "/tmp/aq.json",
        "--format",
        "json",
        "-v",
        "score",
    ])
    .expect("Valid command parsing");
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/aq.json")));
    assert_eq!(cli.format, OutputFormat::Json);
    assert_eq!(cli.verbose, 1);
}

#[test]
fn test_parse_unknown_command() {
    assert!(Cli::try_parse_from(["autoquality", "benchmark"]).is_err());
}
