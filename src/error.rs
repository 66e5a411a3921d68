// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for autoquality
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Main error type for autoquality operations
#[derive(Error, Debug)]
pub enum AutoQualityError {
    /// Scoring could not produce a meaningful result
    #[error("Scoring error: {0}")]
    Scoring(#[from] ScoringError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Session errors
    #[error("Session error: {0}")]
    Session(String),
}

/// Reasons the scorer refuses to compare two profiles.
///
/// Every ratio in the scoring algorithm divides a user attribute by the
/// matching reference attribute. These errors replace the NaN/Infinity a
/// zero or unknown denominator would otherwise produce.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    /// Reference attribute is zero, negative or the unknown sentinel
    #[error("reference {attribute} must be a positive measurement, got {value}")]
    InvalidReference {
        attribute: &'static str,
        value: f64,
    },

    /// User attribute is the unknown sentinel
    #[error("user {attribute} is unknown")]
    UnknownUserAttribute { attribute: &'static str },

    /// A profile violates its own invariants
    #[error("invalid profile: {0}")]
    InvalidProfile(String),
}

/// Result type alias for autoquality operations
pub type Result<T> = std::result::Result<T, AutoQualityError>;

impl From<toml::de::Error> for AutoQualityError {
    fn from(err: toml::de::Error) -> Self {
        AutoQualityError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for AutoQualityError {
    fn from(err: toml::ser::Error) -> Self {
        AutoQualityError::Toml(err.to_string())
    }
}
