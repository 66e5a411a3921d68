// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Composite capability score calculation.
//!
//! Implements the ratio-based comparison:
//! ```text
//! base      = 100 * (device weight of user class, if classes differ)
//! gpu       = mem_ratio * shader_ratio * texture_ratio * (1 - mt_penalty?) * scale_ratio
//! cpu       = core_ratio (1.0 above ignore_cores_above) * frequency_ratio
//! ram       = memory_ratio
//! average   = (cpu + gpu + ram) / 3 * (1 - shadow?) * (1 - compute?) * (1 - effects?)
//! composite = average * base
//! ```
//!
//! Each ratio is user / reference. A reference denominator that is zero or
//! unknown is an error instead of an infinite or NaN score.

use serde::{Deserialize, Serialize};

use super::warnings::{render_warnings, CompatibilityWarning};
use super::weights::WeightConfiguration;
use crate::error::ScoringError;
use crate::profile::{Profile, UNKNOWN};

/// Points awarded to a profile identical to the reference.
pub const BASE_POINTS: f64 = 100.0;

/// Shader levels further apart than this trigger a warning.
pub const SHADER_LEVEL_GAP: i32 = 5;

/// Outcome of comparing a user profile against a reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Overall score; 100.0 means identical to the reference
    pub composite: f64,
    /// GPU sub-score on the same 100-centered scale
    pub gpu: f64,
    /// CPU sub-score on the same 100-centered scale
    pub cpu: f64,
    /// Warnings in the order they were raised
    pub warnings: Vec<CompatibilityWarning>,
}

impl ScoreReport {
    /// True when no compatibility warnings were raised
    pub fn is_compatible(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Warning messages, one per line
    pub fn render_warnings(&self) -> String {
        render_warnings(&self.warnings)
    }
}

/// Scorer bound to a weight configuration.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    weights: WeightConfiguration,
}

impl Scorer {
    /// Create a scorer with default weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scorer with custom weights.
    pub fn with_weights(weights: WeightConfiguration) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &WeightConfiguration {
        &self.weights
    }

    /// Compare `user` against `reference`.
    pub fn score(&self, user: &Profile, reference: &Profile) -> Result<ScoreReport, ScoringError> {
        score(user, reference, &self.weights)
    }
}

/// Compare `user` against `reference` using `weights`.
///
/// Pure and deterministic; neither profile is modified.
pub fn score(
    user: &Profile,
    reference: &Profile,
    weights: &WeightConfiguration,
) -> Result<ScoreReport, ScoringError> {
    user.validate()
        .map_err(|e| ScoringError::InvalidProfile(format!("user profile: {}", e)))?;
    reference
        .validate()
        .map_err(|e| ScoringError::InvalidProfile(format!("reference profile: {}", e)))?;

    let mut warnings = Vec::new();

    let mut base_points = BASE_POINTS;
    if user.device_class != reference.device_class {
        base_points *= weights.weight_for(user.device_class);
    }

    if user.graphics_api != reference.graphics_api {
        warnings.push(CompatibilityWarning::GraphicsApiMismatch);
    }

    let mut gpu = 1.0;
    gpu *= ratio("gpu_memory_mb", user.gpu_memory_mb, reference.gpu_memory_mb)?;
    gpu *= ratio(
        "gpu_shader_level",
        user.gpu_shader_level,
        reference.gpu_shader_level,
    )?;
    if reference.gpu_shader_level - user.gpu_shader_level > SHADER_LEVEL_GAP {
        warnings.push(CompatibilityWarning::ShaderModelGap);
    }
    gpu *= ratio(
        "gpu_max_texture_size",
        user.gpu_max_texture_size,
        reference.gpu_max_texture_size,
    )?;
    if !user.gpu_supports_multithreading && reference.gpu_supports_multithreading {
        gpu -= gpu * weights.gpu_multithread_penalty();
        warnings.push(CompatibilityWarning::GpuMultithreading);
    }
    // Both factors are validated to lie in [1.0, 3.5]
    gpu *= f64::from(user.multi_gpu_scale_factor) / f64::from(reference.multi_gpu_scale_factor);

    let mut cpu = 1.0;
    if i64::from(user.cpu_logical_core_count) <= i64::from(weights.ignore_cores_above()) {
        cpu *= ratio(
            "cpu_logical_core_count",
            user.cpu_logical_core_count,
            reference.cpu_logical_core_count,
        )?;
    }
    cpu *= ratio(
        "cpu_frequency_mhz",
        user.cpu_frequency_mhz,
        reference.cpu_frequency_mhz,
    )?;

    let ram = ratio(
        "system_memory_mb",
        user.system_memory_mb,
        reference.system_memory_mb,
    )?;

    let mut average = (cpu + gpu + ram) / 3.0;

    let penalties = [
        (
            user.supports_shadows,
            reference.supports_shadows,
            weights.shadow_penalty(),
            CompatibilityWarning::Shadows,
        ),
        (
            user.supports_compute_shaders,
            reference.supports_compute_shaders,
            weights.compute_penalty(),
            CompatibilityWarning::ComputeShaders,
        ),
        (
            user.supports_image_effects,
            reference.supports_image_effects,
            weights.image_effect_penalty(),
            CompatibilityWarning::ImageEffects,
        ),
    ];
    for (user_has, reference_has, penalty, warning) in penalties {
        if reference_has && !user_has {
            average *= 1.0 - penalty;
            warnings.push(warning);
        }
    }

    let report = ScoreReport {
        composite: average * base_points,
        gpu: gpu * 100.0,
        cpu: cpu * 100.0,
        warnings,
    };

    tracing::debug!(
        base_points,
        gpu = report.gpu,
        cpu = report.cpu,
        ram,
        composite = report.composite,
        warnings = report.warnings.len(),
        "Scored user profile against reference"
    );

    Ok(report)
}

/// `user / reference` for one attribute, refusing unknown or zero inputs.
fn ratio(attribute: &'static str, user: i32, reference: i32) -> Result<f64, ScoringError> {
    if reference <= 0 {
        return Err(ScoringError::InvalidReference {
            attribute,
            value: f64::from(reference),
        });
    }
    if user <= UNKNOWN {
        return Err(ScoringError::UnknownUserAttribute { attribute });
    }
    Ok(f64::from(user) / f64::from(reference))
}
