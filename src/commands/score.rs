// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Score this machine against the stored reference

use crossterm::style::Color;
use serde::Serialize;

use super::print_colored;
use crate::cli::args::OutputFormat;
use crate::config::Settings;
use crate::error::Result;
use crate::hardware::ProfileProvider;
use crate::scoring::CompatibilityWarning;
use crate::session::{Assessment, Session};

#[derive(Serialize)]
struct ScoreOutput<'a> {
    status: &'static str,
    score: Option<f64>,
    gpu_score: Option<f64>,
    cpu_score: Option<f64>,
    /// `null` unless a comparison was actually scored
    compatible: Option<bool>,
    warnings: &'a [CompatibilityWarning],
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference_captured_at: Option<&'a str>,
}

/// Execute the score command
pub fn execute(settings: &Settings, format: OutputFormat) -> Result<()> {
    let mut session = Session::from_settings(settings.provider(), settings);
    session.initialize();

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                render_json(&session, settings.reference_captured_at.as_deref())?
            );
        }
        OutputFormat::Text => {
            print!("{}", render_summary(&session));
            let warnings = session.warnings();
            if !warnings.is_empty() {
                print_colored(Color::Yellow, &warnings)?;
            }
        }
    }

    // Warnings never fail the command; an unusable comparison does.
    if let Assessment::Invalid(e) = session.assessment() {
        return Err(e.clone().into());
    }
    Ok(())
}

/// JSON document describing the last assessment
pub fn render_json<P: ProfileProvider>(
    session: &Session<P>,
    reference_captured_at: Option<&str>,
) -> Result<String> {
    let error = match session.assessment() {
        Assessment::Invalid(e) => Some(e.to_string()),
        _ => None,
    };
    let compatible = session.assessment().report().map(|report| report.is_compatible());
    let output = ScoreOutput {
        status: session.assessment().status(),
        score: session.score(),
        gpu_score: session.gpu_score(),
        cpu_score: session.cpu_score(),
        compatible,
        warnings: session.warning_list(),
        error,
        reference_captured_at,
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Plain-text summary, without the warnings
pub fn render_summary<P: ProfileProvider>(session: &Session<P>) -> String {
    match session.assessment() {
        Assessment::NotInitialized => "Not scored yet.\n".to_string(),
        Assessment::NoReference => "No reference profile set.\n\
             Run `autoquality reference set` on the reference machine or \
             `autoquality reference import <file>`.\n"
            .to_string(),
        Assessment::Invalid(e) => format!(
            "Cannot compare against the reference: {}\n\
             Attributes the OS cannot report can be set under \"host_overrides\" \
             in the settings file.\n",
            e
        ),
        Assessment::Scored(report) => {
            let mut output = format!(
                "Score: {:.1}\nGPU:   {:.1}\nCPU:   {:.1}\n",
                report.composite, report.gpu, report.cpu
            );
            if report.is_compatible() {
                output.push_str("Compatible: yes\n");
            } else {
                output.push_str(&format!(
                    "Compatible: no ({} warning{})\n",
                    report.warnings.len(),
                    if report.warnings.len() == 1 { "" } else { "s" }
                ));
            }
            output
        }
    }
}
