// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Tunable coefficients for the scorer.
//!
//! A [`WeightConfiguration`] can only hold in-range values. Raw input arrives as
//! [`WeightSettings`] and is either repaired field by field
//! ([`WeightConfiguration::new`]) or rejected ([`WeightConfiguration::try_new`]).

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{AutoQualityError, Result};
use crate::profile::DeviceClass;

/// Valid range for device weights and penalties.
pub const UNIT_RANGE: RangeInclusive<f64> = 0.0..=1.0;

/// Valid range for `ignore_cores_above`.
pub const CORE_THRESHOLD_RANGE: RangeInclusive<i64> = 1..=8;

/// Unvalidated weight values, as read from a settings file or the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightSettings {
    /// Base points multiplier when a desktop is compared against another class
    pub desktop_weight: f64,
    pub console_weight: f64,
    pub handheld_weight: f64,

    /// Logical cores above this count add nothing to the CPU score
    pub ignore_cores_above: i64,

    /// GPU score -= GPU score * this value when multithreading is missing
    pub gpu_multithread_penalty: f64,
    /// Score -= score * this value when compute shaders are missing
    pub compute_penalty: f64,
    pub image_effect_penalty: f64,
    pub shadow_penalty: f64,
}

impl Default for WeightSettings {
    fn default() -> Self {
        Self {
            desktop_weight: default_desktop_weight(),
            console_weight: default_console_weight(),
            handheld_weight: default_handheld_weight(),
            ignore_cores_above: default_ignore_cores_above(),
            gpu_multithread_penalty: default_gpu_multithread_penalty(),
            compute_penalty: default_compute_penalty(),
            image_effect_penalty: default_image_effect_penalty(),
            shadow_penalty: default_shadow_penalty(),
        }
    }
}

/// Validated scoring coefficients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WeightSettings", into = "WeightSettings")]
pub struct WeightConfiguration {
    desktop_weight: f64,
    console_weight: f64,
    handheld_weight: f64,
    ignore_cores_above: u32,
    gpu_multithread_penalty: f64,
    compute_penalty: f64,
    image_effect_penalty: f64,
    shadow_penalty: f64,
}

impl Default for WeightConfiguration {
    fn default() -> Self {
        Self::new(WeightSettings::default())
    }
}

impl From<WeightSettings> for WeightConfiguration {
    fn from(raw: WeightSettings) -> Self {
        Self::new(raw)
    }
}

impl From<WeightConfiguration> for WeightSettings {
    fn from(weights: WeightConfiguration) -> Self {
        weights.to_settings()
    }
}

impl WeightConfiguration {
    /// Names accepted by [`WeightConfiguration::set`].
    pub const KEYS: [&'static str; 8] = [
        "desktop_weight",
        "console_weight",
        "handheld_weight",
        "ignore_cores_above",
        "gpu_multithread_penalty",
        "compute_penalty",
        "image_effect_penalty",
        "shadow_penalty",
    ];

    /// Build from raw values, replacing each out-of-range field with its default.
    pub fn new(raw: WeightSettings) -> Self {
        Self {
            desktop_weight: unit_or_default(
                "desktop_weight",
                raw.desktop_weight,
                default_desktop_weight(),
            ),
            console_weight: unit_or_default(
                "console_weight",
                raw.console_weight,
                default_console_weight(),
            ),
            handheld_weight: unit_or_default(
                "handheld_weight",
                raw.handheld_weight,
                default_handheld_weight(),
            ),
            ignore_cores_above: cores_or_default(raw.ignore_cores_above),
            gpu_multithread_penalty: unit_or_default(
                "gpu_multithread_penalty",
                raw.gpu_multithread_penalty,
                default_gpu_multithread_penalty(),
            ),
            compute_penalty: unit_or_default(
                "compute_penalty",
                raw.compute_penalty,
                default_compute_penalty(),
            ),
            image_effect_penalty: unit_or_default(
                "image_effect_penalty",
                raw.image_effect_penalty,
                default_image_effect_penalty(),
            ),
            shadow_penalty: unit_or_default(
                "shadow_penalty",
                raw.shadow_penalty,
                default_shadow_penalty(),
            ),
        }
    }

    /// Build from raw values, rejecting the first out-of-range field.
    pub fn try_new(raw: WeightSettings) -> Result<Self> {
        let unit_fields = [
            ("desktop_weight", raw.desktop_weight),
            ("console_weight", raw.console_weight),
            ("handheld_weight", raw.handheld_weight),
            ("gpu_multithread_penalty", raw.gpu_multithread_penalty),
            ("compute_penalty", raw.compute_penalty),
            ("image_effect_penalty", raw.image_effect_penalty),
            ("shadow_penalty", raw.shadow_penalty),
        ];
        for (name, value) in unit_fields {
            if !in_unit_range(value) {
                return Err(AutoQualityError::Config(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        if !CORE_THRESHOLD_RANGE.contains(&raw.ignore_cores_above) {
            return Err(AutoQualityError::Config(format!(
                "ignore_cores_above must be within [1, 8], got {}",
                raw.ignore_cores_above
            )));
        }

        Ok(Self::new(raw))
    }

    /// Update one named coefficient, keeping the rest.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut raw = self.to_settings();
        let parse_unit = |value: &str| -> Result<f64> {
            value.trim().parse::<f64>().map_err(|_| {
                AutoQualityError::InvalidInput(format!("{} expects a number, got '{}'", key, value))
            })
        };

        match key {
            "desktop_weight" => raw.desktop_weight = parse_unit(value)?,
            "console_weight" => raw.console_weight = parse_unit(value)?,
            "handheld_weight" => raw.handheld_weight = parse_unit(value)?,
            "gpu_multithread_penalty" => raw.gpu_multithread_penalty = parse_unit(value)?,
            "compute_penalty" => raw.compute_penalty = parse_unit(value)?,
            "image_effect_penalty" => raw.image_effect_penalty = parse_unit(value)?,
            "shadow_penalty" => raw.shadow_penalty = parse_unit(value)?,
            "ignore_cores_above" => {
                raw.ignore_cores_above = value.trim().parse::<i64>().map_err(|_| {
                    AutoQualityError::InvalidInput(format!(
                        "ignore_cores_above expects an integer, got '{}'",
                        value
                    ))
                })?
            }
            _ => {
                return Err(AutoQualityError::Config(format!(
                    "unknown weight '{}'. Valid keys: {}",
                    key,
                    Self::KEYS.join(", ")
                )))
            }
        }

        *self = Self::try_new(raw)?;
        Ok(())
    }

    /// Name/value pairs in declaration order, for display
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("desktop_weight", self.desktop_weight.to_string()),
            ("console_weight", self.console_weight.to_string()),
            ("handheld_weight", self.handheld_weight.to_string()),
            ("ignore_cores_above", self.ignore_cores_above.to_string()),
            ("gpu_multithread_penalty", self.gpu_multithread_penalty.to_string()),
            ("compute_penalty", self.compute_penalty.to_string()),
            ("image_effect_penalty", self.image_effect_penalty.to_string()),
            ("shadow_penalty", self.shadow_penalty.to_string()),
        ]
    }

    pub fn to_settings(&self) -> WeightSettings {
        WeightSettings {
            desktop_weight: self.desktop_weight,
            console_weight: self.console_weight,
            handheld_weight: self.handheld_weight,
            ignore_cores_above: i64::from(self.ignore_cores_above),
            gpu_multithread_penalty: self.gpu_multithread_penalty,
            compute_penalty: self.compute_penalty,
            image_effect_penalty: self.image_effect_penalty,
            shadow_penalty: self.shadow_penalty,
        }
    }

    /// Base points multiplier for a user device of the given class.
    ///
    /// `Unknown` has no weight of its own and multiplies by 1.0.
    pub fn weight_for(&self, class: DeviceClass) -> f64 {
        match class {
            DeviceClass::Desktop => self.desktop_weight,
            DeviceClass::Console => self.console_weight,
            DeviceClass::Handheld => self.handheld_weight,
            DeviceClass::Unknown => 1.0,
        }
    }

    pub fn desktop_weight(&self) -> f64 {
        self.desktop_weight
    }

    pub fn console_weight(&self) -> f64 {
        self.console_weight
    }

    pub fn handheld_weight(&self) -> f64 {
        self.handheld_weight
    }

    pub fn ignore_cores_above(&self) -> u32 {
        self.ignore_cores_above
    }

    pub fn gpu_multithread_penalty(&self) -> f64 {
        self.gpu_multithread_penalty
    }

    pub fn compute_penalty(&self) -> f64 {
        self.compute_penalty
    }

    pub fn image_effect_penalty(&self) -> f64 {
        self.image_effect_penalty
    }

    pub fn shadow_penalty(&self) -> f64 {
        self.shadow_penalty
    }
}

fn in_unit_range(value: f64) -> bool {
    value.is_finite() && UNIT_RANGE.contains(&value)
}

fn unit_or_default(name: &str, value: f64, default: f64) -> f64 {
    if in_unit_range(value) {
        value
    } else {
        tracing::warn!(
            "Weight {} = {} is outside [0, 1]; using default {}",
            name,
            value,
            default
        );
        default
    }
}

fn cores_or_default(value: i64) -> u32 {
    match u32::try_from(value) {
        Ok(cores) if CORE_THRESHOLD_RANGE.contains(&value) => cores,
        _ => {
            let default = default_ignore_cores_above();
            tracing::warn!(
                "Weight ignore_cores_above = {} is outside [1, 8]; using default {}",
                value,
                default
            );
            default as u32
        }
    }
}

fn default_desktop_weight() -> f64 {
    1.0
}

fn default_console_weight() -> f64 {
    1.0
}

fn default_handheld_weight() -> f64 {
    0.7
}

fn default_ignore_cores_above() -> i64 {
    2
}

fn default_gpu_multithread_penalty() -> f64 {
    0.5
}

fn default_compute_penalty() -> f64 {
    0.5
}

fn default_image_effect_penalty() -> f64 {
    0.25
}

fn default_shadow_penalty() -> f64 {
    0.9
}
