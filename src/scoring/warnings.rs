// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Compatibility warnings raised while scoring

use serde::{Deserialize, Serialize};

/// An advisory message about a capability the reference has and the user lacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityWarning {
    /// The two profiles render through different graphics APIs
    GraphicsApiMismatch,
    /// The reference shader level exceeds the user's by more than 5
    ShaderModelGap,
    GpuMultithreading,
    Shadows,
    ComputeShaders,
    ImageEffects,
}

impl CompatibilityWarning {
    /// Human-readable sentence for this warning
    pub fn message(&self) -> &'static str {
        match self {
            CompatibilityWarning::GraphicsApiMismatch => {
                "WARNING: The reference configuration and user configuration are using different graphics APIs. This may cause incompatibility or rendering issues."
            }
            CompatibilityWarning::ShaderModelGap => {
                "WARNING: The reference configuration and user configuration support different Shader Models. This may cause incompatibility or rendering issues."
            }
            CompatibilityWarning::GpuMultithreading => {
                "WARNING: The reference configuration supports GPU multithreading, but the user configuration does not!"
            }
            CompatibilityWarning::Shadows => {
                "WARNING: The reference configuration supports shadows, but the user configuration does not!"
            }
            CompatibilityWarning::ComputeShaders => {
                "WARNING: The reference configuration supports Compute Shaders, but the user configuration does not!"
            }
            CompatibilityWarning::ImageEffects => {
                "WARNING: The reference configuration supports Image Effects, but the user configuration does not!"
            }
        }
    }
}

impl std::fmt::Display for CompatibilityWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Join warnings for display, each followed by a newline.
pub fn render_warnings(warnings: &[CompatibilityWarning]) -> String {
    warnings
        .iter()
        .map(|warning| format!("{}\n", warning))
        .collect()
}
