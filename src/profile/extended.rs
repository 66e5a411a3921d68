// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Extended-fidelity profile for diagnostics and export.
//!
//! Embeds the minimal [`Profile`] rather than extending it; nothing in the
//! scorer reads the extra attributes.

use serde::{Deserialize, Serialize};

use super::minimal::Profile;
use super::types::{NpotSupport, UNKNOWN};

/// Every discoverable attribute of a host.
///
/// Building one never fails. Attributes the host cannot supply stay at
/// `-1`, `""` or `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtendedProfile {
    #[serde(flatten)]
    pub core: Profile,

    pub device_model: String,
    pub device_name: String,
    pub device_id: String,

    pub gpu_device_id: i32,
    pub gpu_device_name: String,
    pub gpu_vendor: String,
    pub gpu_vendor_id: i32,
    pub gpu_version: String,
    pub npot_support: NpotSupport,
    pub supported_render_target_count: i32,

    pub operating_system: String,
    pub processor_type: String,

    pub supports_2d_array_textures: bool,
    pub supports_3d_textures: bool,
    pub supports_audio: bool,
    pub supports_gyroscope: bool,
    pub supports_instancing: bool,
    pub supports_location_service: bool,
    pub supports_motion_vectors: bool,
    pub supports_raw_shadow_depth_sampling: bool,
    pub supports_render_to_cubemap: bool,
    pub supports_sparse_textures: bool,
    pub supports_vibration: bool,
}

impl Default for ExtendedProfile {
    fn default() -> Self {
        Self {
            core: Profile::default(),
            device_model: String::new(),
            device_name: String::new(),
            device_id: String::new(),
            gpu_device_id: UNKNOWN,
            gpu_device_name: String::new(),
            gpu_vendor: String::new(),
            gpu_vendor_id: UNKNOWN,
            gpu_version: String::new(),
            npot_support: NpotSupport::None,
            supported_render_target_count: UNKNOWN,
            operating_system: String::new(),
            processor_type: String::new(),
            supports_2d_array_textures: false,
            supports_3d_textures: false,
            supports_audio: false,
            supports_gyroscope: false,
            supports_instancing: false,
            supports_location_service: false,
            supports_motion_vectors: false,
            supports_raw_shadow_depth_sampling: false,
            supports_render_to_cubemap: false,
            supports_sparse_textures: false,
            supports_vibration: false,
        }
    }
}

impl ExtendedProfile {
    /// The scoring attributes
    pub fn core(&self) -> &Profile {
        &self.core
    }

    pub fn into_core(self) -> Profile {
        self.core
    }

    /// Count of optional feature flags the host reports as supported.
    pub fn supported_feature_count(&self) -> usize {
        [
            self.supports_2d_array_textures,
            self.supports_3d_textures,
            self.supports_audio,
            self.supports_gyroscope,
            self.supports_instancing,
            self.supports_location_service,
            self.supports_motion_vectors,
            self.supports_raw_shadow_depth_sampling,
            self.supports_render_to_cubemap,
            self.supports_sparse_textures,
            self.supports_vibration,
        ]
        .iter()
        .filter(|supported| **supported)
        .count()
    }
}

impl From<Profile> for ExtendedProfile {
    fn from(core: Profile) -> Self {
        Self {
            core,
            ..Self::default()
        }
    }
}
