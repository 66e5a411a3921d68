// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! autoquality - rough capability scoring of a host against a reference machine.
//!
//! This crate exposes the library used by the `autoquality` CLI
//! (`src/main.rs`) and by applications that want to pick default quality
//! settings from a hardware comparison.
//!
//! Architecture highlights:
//! - `profile`: capability snapshots with `-1`/`Unknown` sentinels
//! - `scoring`: weights, the ratio-based scorer and compatibility warnings
//! - `hardware`: host capture through `sysinfo` plus manual overrides
//! - `session`: user/reference state and the last assessment
//! - `config`: settings file load/save/validation
//! - `cli`, `commands`: the command-line surface

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod hardware;
pub mod profile;
pub mod scoring;
pub mod session;

pub use error::{AutoQualityError, Result};
