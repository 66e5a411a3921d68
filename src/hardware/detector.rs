// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Host profile detection backed by `sysinfo`

use std::path::Path;

use sysinfo::System;

use super::overrides::HostOverrides;
use super::provider::ProfileProvider;
use crate::profile::{or_unknown, DeviceClass, ExtendedProfile, Profile, UNKNOWN};

/// Raw values read from the host before they are mapped onto a profile
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostReadings {
    pub device_class: DeviceClass,
    pub logical_cores: usize,
    /// Highest reported core frequency in MHz (0 when unreadable)
    pub max_frequency_mhz: u64,
    /// Total memory in bytes (0 when unreadable)
    pub total_memory_bytes: u64,
    pub operating_system: Option<String>,
    pub host_name: Option<String>,
    pub cpu_brand: Option<String>,
    pub device_model: Option<String>,
    pub device_id: Option<String>,
}

impl HostReadings {
    /// Read the current host
    pub fn read() -> Self {
        let mut sys = System::new_all();

        // Refresh system information
        sys.refresh_all();

        let cpus = sys.cpus();
        let max_frequency_mhz = cpus.iter().map(|cpu| cpu.frequency()).max().unwrap_or(0);
        let cpu_brand = cpus
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty());

        Self {
            device_class: DeviceClass::detect(),
            logical_cores: cpus.len(),
            max_frequency_mhz,
            total_memory_bytes: sys.total_memory(),
            operating_system: System::long_os_version(),
            host_name: System::host_name(),
            cpu_brand,
            device_model: read_device_model(),
            device_id: read_device_id(),
        }
    }

    /// Map readings onto an extended profile; zero readings become unknown.
    pub fn into_profile(self) -> ExtendedProfile {
        let cpu_logical_core_count = i32::try_from(self.logical_cores)
            .ok()
            .filter(|cores| *cores > 0)
            .unwrap_or(UNKNOWN);

        let desktop = self.device_class == DeviceClass::Desktop;

        ExtendedProfile {
            core: Profile {
                device_class: self.device_class,
                cpu_logical_core_count,
                cpu_frequency_mhz: or_unknown(Some(self.max_frequency_mhz)),
                system_memory_mb: or_unknown(Some(self.total_memory_bytes / (1024 * 1024))),
                ..Profile::default()
            },
            device_model: self.device_model.unwrap_or_default(),
            device_name: self.host_name.unwrap_or_default(),
            device_id: self.device_id.unwrap_or_default(),
            operating_system: self.operating_system.unwrap_or_default(),
            processor_type: self.cpu_brand.unwrap_or_default(),
            supports_audio: desktop,
            ..ExtendedProfile::default()
        }
    }
}

/// Profile provider reading the live host through `sysinfo`.
///
/// GPU attributes and feature flags are not discoverable from the OS and stay
/// unknown unless supplied through [`HostOverrides`].
#[derive(Debug, Clone, Default)]
pub struct SystemProvider {
    overrides: HostOverrides,
}

impl SystemProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider that applies `overrides` after detection
    pub fn with_overrides(overrides: HostOverrides) -> Self {
        Self { overrides }
    }

    pub fn overrides(&self) -> &HostOverrides {
        &self.overrides
    }
}

impl ProfileProvider for SystemProvider {
    fn capture(&self) -> ExtendedProfile {
        let readings = HostReadings::read();
        tracing::debug!(
            cores = readings.logical_cores,
            frequency_mhz = readings.max_frequency_mhz,
            memory_bytes = readings.total_memory_bytes,
            class = %readings.device_class,
            "Read host hardware"
        );

        let mut profile = readings.into_profile();
        self.overrides.apply(&mut profile);
        profile
    }
}

/// Best-effort device model string (board or product name)
fn read_device_model() -> Option<String> {
    // Device tree covers Raspberry Pi and other ARM boards; DMI covers PCs
    for path in [
        "/proc/device-tree/model",
        "/sys/firmware/devicetree/base/model",
        "/sys/class/dmi/id/product_name",
    ] {
        if let Some(model) = read_trimmed(Path::new(path)) {
            return Some(model);
        }
    }
    None
}

/// Stable machine identifier, where the OS exposes one
fn read_device_id() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        for path in ["/etc/machine-id", "/var/lib/dbus/machine-id"] {
            if let Some(id) = read_trimmed(Path::new(path)) {
                return Some(id);
            }
        }
        None
    }

    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

fn read_trimmed(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    let trimmed = content.trim_matches(|c: char| c == '\0' || c.is_whitespace());
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
