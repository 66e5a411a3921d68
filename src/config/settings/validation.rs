// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use crate::error::{AutoQualityError, Result};
use crate::hardware::SystemProvider;
use crate::profile::Profile;

use super::Settings;

impl Settings {
    /// Check the stored reference and the host overrides.
    pub fn validate(&self) -> Result<()> {
        self.validate_reference()?;
        self.host_overrides.validate()
    }

    /// Check the stored reference profile and its capture timestamp.
    pub fn validate_reference(&self) -> Result<()> {
        if let Some(ref reference) = self.reference {
            reference.validate().map_err(|e| {
                AutoQualityError::Config(format!("stored reference is invalid: {}", e))
            })?;
        }

        if let Some(ref captured_at) = self.reference_captured_at {
            chrono::DateTime::parse_from_rfc3339(captured_at).map_err(|e| {
                AutoQualityError::Config(format!(
                    "reference_captured_at '{}' is not RFC 3339: {}",
                    captured_at, e
                ))
            })?;
        }

        Ok(())
    }

    pub fn reference_profile(&self) -> Option<&Profile> {
        self.reference.as_ref()
    }

    /// Store `reference` and stamp the capture time.
    pub fn record_reference(&mut self, reference: Profile) {
        self.reference = Some(reference);
        self.reference_captured_at = Some(chrono::Utc::now().to_rfc3339());
    }

    pub fn clear_reference(&mut self) {
        self.reference = None;
        self.reference_captured_at = None;
    }

    /// Host provider honoring the configured overrides
    pub fn provider(&self) -> SystemProvider {
        SystemProvider::with_overrides(self.host_overrides.clone())
    }
}
