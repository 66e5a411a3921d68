// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Source of live host profiles

use crate::profile::ExtendedProfile;

/// Supplies the capability profile of the current host.
///
/// Implementations never fail: any attribute that cannot be determined is
/// reported with its sentinel (`-1`, `""`, `false` or `Unknown`).
pub trait ProfileProvider {
    /// Take a snapshot of the host
    fn capture(&self) -> ExtendedProfile;
}

impl<P: ProfileProvider + ?Sized> ProfileProvider for &P {
    fn capture(&self) -> ExtendedProfile {
        (**self).capture()
    }
}

impl<P: ProfileProvider + ?Sized> ProfileProvider for Box<P> {
    fn capture(&self) -> ExtendedProfile {
        (**self).capture()
    }
}

/// Provider that always reports the same profile
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    profile: ExtendedProfile,
}

impl StaticProvider {
    pub fn new(profile: impl Into<ExtendedProfile>) -> Self {
        Self {
            profile: profile.into(),
        }
    }

    /// Replace the reported profile
    pub fn set(&mut self, profile: impl Into<ExtendedProfile>) {
        self.profile = profile.into();
    }
}

impl ProfileProvider for StaticProvider {
    fn capture(&self) -> ExtendedProfile {
        self.profile.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{DeviceClass, Profile};

    #[test]
    fn test_static_provider_returns_profile() {
        let core = Profile {
            device_class: DeviceClass::Console,
            gpu_memory_mb: 8192,
            ..Profile::default()
        };
        let provider = StaticProvider::new(core.clone());
        assert_eq!(provider.capture().into_core(), core);
        assert_eq!(provider.capture(), provider.capture());
    }

    #[test]
    fn test_static_provider_set() {
        let mut provider = StaticProvider::default();
        assert_eq!(provider.capture(), ExtendedProfile::default());

        provider.set(Profile {
            system_memory_mb: 4096,
            ..Profile::default()
        });
        assert_eq!(provider.capture().core.system_memory_mb, 4096);
    }

    #[test]
    fn test_provider_by_reference_and_box() {
        let provider = StaticProvider::new(Profile {
            cpu_frequency_mhz: 2400,
            ..Profile::default()
        });
        let by_ref: &dyn ProfileProvider = &provider;
        assert_eq!(by_ref.capture().core.cpu_frequency_mhz, 2400);

        let boxed: Box<dyn ProfileProvider> = Box::new(provider.clone());
        assert_eq!(boxed.capture().core.cpu_frequency_mhz, 2400);
    }
}
