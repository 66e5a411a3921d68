// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Manually configured host attributes.
//!
//! The operating system does not expose GPU memory, shader level, texture
//! limits, the active graphics API or multi-GPU scaling. Users supply them
//! here and they replace whatever detection produced.

use serde::{Deserialize, Serialize};

use crate::error::{AutoQualityError, Result};
use crate::profile::minimal::clamp_scale_factor;
use crate::profile::{DeviceClass, ExtendedProfile, GraphicsApi, UNKNOWN};

/// Per-attribute overrides applied after detection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_class: Option<DeviceClass>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graphics_api: Option<GraphicsApi>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu_memory_mb: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu_supports_multithreading: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu_shader_level: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu_max_texture_size: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_logical_core_count: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_frequency_mhz: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_memory_mb: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_compute_shaders: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_image_effects: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_shadows: Option<bool>,

    /// Clamped into `[1.0, 3.5]` when applied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_gpu_scale_factor: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu_device_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu_vendor: Option<String>,
}

impl HostOverrides {
    /// True when nothing is overridden
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Reject numeric overrides below the unknown sentinel.
    pub fn validate(&self) -> Result<()> {
        let numeric = [
            ("gpu_memory_mb", self.gpu_memory_mb),
            ("gpu_shader_level", self.gpu_shader_level),
            ("gpu_max_texture_size", self.gpu_max_texture_size),
            ("cpu_logical_core_count", self.cpu_logical_core_count),
            ("cpu_frequency_mhz", self.cpu_frequency_mhz),
            ("system_memory_mb", self.system_memory_mb),
        ];
        for (name, value) in numeric {
            if let Some(value) = value {
                if value < UNKNOWN {
                    return Err(AutoQualityError::Config(format!(
                        "host override {} must be >= {}, got {}",
                        name, UNKNOWN, value
                    )));
                }
            }
        }
        Ok(())
    }

    /// Write every set override into `profile`.
    pub fn apply(&self, profile: &mut ExtendedProfile) {
        let core = &mut profile.core;

        if let Some(class) = self.device_class {
            core.device_class = class;
        }
        if let Some(api) = self.graphics_api {
            core.graphics_api = api;
        }
        if let Some(mb) = self.gpu_memory_mb {
            core.gpu_memory_mb = mb.max(UNKNOWN);
        }
        if let Some(multithreading) = self.gpu_supports_multithreading {
            core.gpu_supports_multithreading = multithreading;
        }
        if let Some(level) = self.gpu_shader_level {
            core.gpu_shader_level = level.max(UNKNOWN);
        }
        if let Some(size) = self.gpu_max_texture_size {
            core.gpu_max_texture_size = size.max(UNKNOWN);
        }
        if let Some(cores) = self.cpu_logical_core_count {
            core.cpu_logical_core_count = cores.max(UNKNOWN);
        }
        if let Some(mhz) = self.cpu_frequency_mhz {
            core.cpu_frequency_mhz = mhz.max(UNKNOWN);
        }
        if let Some(mb) = self.system_memory_mb {
            core.system_memory_mb = mb.max(UNKNOWN);
        }
        if let Some(supported) = self.supports_compute_shaders {
            core.supports_compute_shaders = supported;
        }
        if let Some(supported) = self.supports_image_effects {
            core.supports_image_effects = supported;
        }
        if let Some(supported) = self.supports_shadows {
            core.supports_shadows = supported;
        }
        if let Some(factor) = self.multi_gpu_scale_factor {
            core.multi_gpu_scale_factor = clamp_scale_factor(factor);
        }

        if let Some(ref name) = self.gpu_device_name {
            profile.gpu_device_name = name.clone();
        }
        if let Some(ref vendor) = self.gpu_vendor {
            profile.gpu_vendor = vendor.clone();
        }
    }
}
