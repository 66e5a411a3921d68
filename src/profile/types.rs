// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Enumerations and sentinel helpers shared by both profile fidelities

use serde::{Deserialize, Serialize};

/// Sentinel for a numeric attribute the host could not report.
pub const UNKNOWN: i32 = -1;

/// Lower bound of the multi-GPU scale factor.
pub const MIN_MULTI_GPU_SCALE: f32 = 1.0;

/// Upper bound of the multi-GPU scale factor.
pub const MAX_MULTI_GPU_SCALE: f32 = 3.5;

/// Return the measurement if it is known.
///
/// Values below zero other than the sentinel are invalid and also map to `None`;
/// [`Profile::validate`](super::Profile::validate) reports them separately.
pub fn known(value: i32) -> Option<u32> {
    u32::try_from(value).ok()
}

/// Convert an optional measurement into the sentinel encoding.
pub fn or_unknown(value: Option<u64>) -> i32 {
    value
        .filter(|v| *v > 0)
        .and_then(|v| i32::try_from(v).ok())
        .unwrap_or(UNKNOWN)
}

/// Broad class of the device running the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DeviceClass {
    /// Desktops, laptops and most tablets
    Desktop,
    Console,
    /// Phones and other mobile devices
    Handheld,
    #[default]
    Unknown,
}

impl DeviceClass {
    /// Classify the current host from its target operating system
    pub fn detect() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    fn from_os(os: &str) -> Self {
        match os {
            "android" | "ios" => DeviceClass::Handheld,
            "linux" | "macos" | "windows" | "freebsd" | "netbsd" | "openbsd" | "dragonfly"
            | "solaris" | "illumos" => DeviceClass::Desktop,
            _ => DeviceClass::Unknown,
        }
    }
}

impl std::fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceClass::Desktop => write!(f, "Desktop"),
            DeviceClass::Console => write!(f, "Console"),
            DeviceClass::Handheld => write!(f, "Handheld"),
            DeviceClass::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Active rendering API.
///
/// Only compared for equality; it never contributes to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GraphicsApi {
    #[default]
    Unknown,
    Direct3D11,
    Direct3D12,
    OpenGLCore,
    OpenGLES2,
    OpenGLES3,
    Vulkan,
    Metal,
    WebGpu,
    PlayStation4,
    PlayStation5,
    XboxOne,
    GameCoreXboxSeries,
    Switch,
}

impl std::fmt::Display for GraphicsApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GraphicsApi::Unknown => "Unknown",
            GraphicsApi::Direct3D11 => "Direct3D 11",
            GraphicsApi::Direct3D12 => "Direct3D 12",
            GraphicsApi::OpenGLCore => "OpenGL Core",
            GraphicsApi::OpenGLES2 => "OpenGL ES 2",
            GraphicsApi::OpenGLES3 => "OpenGL ES 3",
            GraphicsApi::Vulkan => "Vulkan",
            GraphicsApi::Metal => "Metal",
            GraphicsApi::WebGpu => "WebGPU",
            GraphicsApi::PlayStation4 => "PlayStation 4",
            GraphicsApi::PlayStation5 => "PlayStation 5",
            GraphicsApi::XboxOne => "Xbox One",
            GraphicsApi::GameCoreXboxSeries => "Xbox Series",
            GraphicsApi::Switch => "Switch",
        };
        write!(f, "{}", name)
    }
}

/// Level of support for non-power-of-two textures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NpotSupport {
    #[default]
    None,
    /// Limited to clamp wrapping and no mipmaps
    Restricted,
    Full,
}
