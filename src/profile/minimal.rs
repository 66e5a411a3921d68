// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Minimal-fidelity profile: exactly the attributes the scorer reads

use serde::{Deserialize, Serialize};

use super::types::{
    DeviceClass, GraphicsApi, MAX_MULTI_GPU_SCALE, MIN_MULTI_GPU_SCALE, UNKNOWN,
};
use crate::error::{AutoQualityError, Result};

/// Snapshot of the capability attributes used for comparison.
///
/// Numeric fields hold either a measurement (`>= 0`) or [`UNKNOWN`].
/// `Profile::default()` is the cleared state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub device_class: DeviceClass,
    pub graphics_api: GraphicsApi,

    /// Graphics memory (VRAM) in MB
    pub gpu_memory_mb: i32,
    pub gpu_supports_multithreading: bool,
    /// Shader model level; higher is more capable
    pub gpu_shader_level: i32,
    /// Largest supported texture dimension in pixels
    pub gpu_max_texture_size: i32,

    pub cpu_logical_core_count: i32,
    pub cpu_frequency_mhz: i32,
    /// System memory (RAM) in MB
    pub system_memory_mb: i32,

    pub supports_compute_shaders: bool,
    pub supports_image_effects: bool,
    pub supports_shadows: bool,

    /// Manual multiplier approximating multi-GPU (SLI/CrossFire) setups.
    ///
    /// Multi-GPU scaling cannot be detected, so this is always configured by
    /// hand. About 1.6 is a safe number for a dual-card system.
    pub multi_gpu_scale_factor: f32,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            device_class: DeviceClass::Unknown,
            graphics_api: GraphicsApi::Unknown,
            gpu_memory_mb: UNKNOWN,
            gpu_supports_multithreading: false,
            gpu_shader_level: UNKNOWN,
            gpu_max_texture_size: UNKNOWN,
            cpu_logical_core_count: UNKNOWN,
            cpu_frequency_mhz: UNKNOWN,
            system_memory_mb: UNKNOWN,
            supports_compute_shaders: false,
            supports_image_effects: false,
            supports_shadows: false,
            multi_gpu_scale_factor: MIN_MULTI_GPU_SCALE,
        }
    }
}

impl Profile {
    /// Set the multi-GPU scale factor, clamped into `[1.0, 3.5]`.
    pub fn with_multi_gpu_scale_factor(mut self, factor: f32) -> Self {
        self.multi_gpu_scale_factor = clamp_scale_factor(factor);
        self
    }

    /// Reset every attribute to its unknown value.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether any numeric attribute is still unknown
    pub fn has_unknowns(&self) -> bool {
        self.numeric_fields().iter().any(|(_, v)| *v == UNKNOWN)
    }

    /// Check the sentinel and scale-factor invariants.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.numeric_fields() {
            if value < UNKNOWN {
                return Err(AutoQualityError::InvalidInput(format!(
                    "{} must be a non-negative measurement or {}, got {}",
                    name, UNKNOWN, value
                )));
            }
        }

        let scale = self.multi_gpu_scale_factor;
        if !scale.is_finite() || !(MIN_MULTI_GPU_SCALE..=MAX_MULTI_GPU_SCALE).contains(&scale) {
            return Err(AutoQualityError::InvalidInput(format!(
                "multi_gpu_scale_factor must be within [{}, {}], got {}",
                MIN_MULTI_GPU_SCALE, MAX_MULTI_GPU_SCALE, scale
            )));
        }

        Ok(())
    }

    pub(crate) fn numeric_fields(&self) -> [(&'static str, i32); 6] {
        [
            ("gpu_memory_mb", self.gpu_memory_mb),
            ("gpu_shader_level", self.gpu_shader_level),
            ("gpu_max_texture_size", self.gpu_max_texture_size),
            ("cpu_logical_core_count", self.cpu_logical_core_count),
            ("cpu_frequency_mhz", self.cpu_frequency_mhz),
            ("system_memory_mb", self.system_memory_mb),
        ]
    }
}

pub(crate) fn clamp_scale_factor(factor: f32) -> f32 {
    if factor.is_finite() {
        factor.clamp(MIN_MULTI_GPU_SCALE, MAX_MULTI_GPU_SCALE)
    } else {
        MIN_MULTI_GPU_SCALE
    }
}
