// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Scoring session
//!
//! A [`Session`] holds the current user and reference profiles together with
//! the weights, and remembers the outcome of the last [`Session::initialize`].
//! It is an ordinary value: construct one, pass it where it is needed, and
//! wrap it in a lock if several threads must share it.

use crate::config::Settings;
use crate::error::{AutoQualityError, Result, ScoringError};
use crate::hardware::ProfileProvider;
use crate::profile::{ExtendedProfile, Profile};
use crate::scoring::{self, CompatibilityWarning, ScoreReport, WeightConfiguration};

/// Result of the last initialization
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Assessment {
    /// `initialize` has not run since construction or the last reference change
    #[default]
    NotInitialized,
    /// No reference profile is set; nothing was scored
    NoReference,
    Scored(ScoreReport),
    /// The profiles could not be compared
    Invalid(ScoringError),
}

impl Assessment {
    pub fn report(&self) -> Option<&ScoreReport> {
        match self {
            Assessment::Scored(report) => Some(report),
            _ => None,
        }
    }

    /// Short status label
    pub fn status(&self) -> &'static str {
        match self {
            Assessment::NotInitialized => "not_initialized",
            Assessment::NoReference => "no_reference",
            Assessment::Scored(_) => "scored",
            Assessment::Invalid(_) => "invalid",
        }
    }
}

/// User/reference comparison state
#[derive(Debug)]
pub struct Session<P: ProfileProvider> {
    provider: P,
    weights: WeightConfiguration,
    reference: Option<Profile>,
    user: Profile,
    extended: Option<ExtendedProfile>,
    use_extended_profile: bool,
    assessment: Assessment,
}

impl<P: ProfileProvider> Session<P> {
    /// Create a session with default weights and no reference.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            weights: WeightConfiguration::default(),
            reference: None,
            user: Profile::default(),
            extended: None,
            use_extended_profile: false,
            assessment: Assessment::NotInitialized,
        }
    }

    /// Create a session from stored settings.
    pub fn from_settings(provider: P, settings: &Settings) -> Self {
        let session = Self::new(provider)
            .with_weights(settings.weights.clone())
            .with_extended_profile(settings.use_extended_profile);
        match settings.reference_profile() {
            Some(reference) => session.with_reference(reference.clone()),
            None => session,
        }
    }

    pub fn with_weights(mut self, weights: WeightConfiguration) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_reference(mut self, reference: Profile) -> Self {
        self.reference = Some(reference);
        self
    }

    pub fn with_extended_profile(mut self, enabled: bool) -> Self {
        self.use_extended_profile = enabled;
        self
    }

    /// Capture the user profile and score it against the reference.
    ///
    /// The scorer runs exactly once when a reference is set and not at all
    /// otherwise.
    pub fn initialize(&mut self) -> &Assessment {
        let captured = self.provider.capture();
        if self.use_extended_profile {
            self.user = captured.core.clone();
            self.extended = Some(captured);
        } else {
            self.user = captured.into_core();
            self.extended = None;
        }

        self.assessment = match self.reference {
            None => Assessment::NoReference,
            Some(ref reference) => match scoring::score(&self.user, reference, &self.weights) {
                Ok(report) => Assessment::Scored(report),
                Err(e) => {
                    tracing::warn!(error = %e, "Could not score user profile");
                    Assessment::Invalid(e)
                }
            },
        };

        tracing::info!(
            status = self.assessment.status(),
            score = ?self.score(),
            extended = self.extended.is_some(),
            "Session initialized"
        );
        &self.assessment
    }

    pub fn assessment(&self) -> &Assessment {
        &self.assessment
    }

    /// The scored report, or an error naming why there is none.
    pub fn try_report(&self) -> Result<&ScoreReport> {
        match self.assessment {
            Assessment::Scored(ref report) => Ok(report),
            Assessment::Invalid(ref e) => Err(AutoQualityError::Scoring(e.clone())),
            Assessment::NoReference => Err(AutoQualityError::Session(
                "no reference profile is set".to_string(),
            )),
            Assessment::NotInitialized => Err(AutoQualityError::Session(
                "session has not been initialized".to_string(),
            )),
        }
    }

    /// Warning messages, one per line; empty unless scored.
    pub fn warnings(&self) -> String {
        self.assessment
            .report()
            .map(ScoreReport::render_warnings)
            .unwrap_or_default()
    }

    pub fn warning_list(&self) -> &[CompatibilityWarning] {
        self.assessment
            .report()
            .map(|report| report.warnings.as_slice())
            .unwrap_or(&[])
    }

    /// True iff no warning was raised.
    ///
    /// Also true before a comparison is scored. Check
    /// [`Assessment::report`] to tell the two apart.
    pub fn is_compatible(&self) -> bool {
        self.warning_list().is_empty()
    }

    pub fn score(&self) -> Option<f64> {
        self.assessment.report().map(|report| report.composite)
    }

    pub fn gpu_score(&self) -> Option<f64> {
        self.assessment.report().map(|report| report.gpu)
    }

    pub fn cpu_score(&self) -> Option<f64> {
        self.assessment.report().map(|report| report.cpu)
    }

    pub fn user_profile(&self) -> &Profile {
        &self.user
    }

    pub fn reference_profile(&self) -> Option<&Profile> {
        self.reference.as_ref()
    }

    /// Extended user profile, when extended capture is enabled
    pub fn extended_user_profile(&self) -> Option<&ExtendedProfile> {
        self.extended.as_ref()
    }

    pub fn weights(&self) -> &WeightConfiguration {
        &self.weights
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    /// Make the current host the reference.
    pub fn set_reference(&mut self) -> &Profile {
        let reference = self.provider.capture().into_core();
        self.set_reference_to(reference);
        tracing::info!("Reference set from current host");
        self.reference.get_or_insert_with(Profile::default)
    }

    /// Replace the reference with `reference`.
    pub fn set_reference_to(&mut self, reference: Profile) {
        self.reference = Some(reference);
        self.assessment = Assessment::NotInitialized;
    }

    pub fn clear_reference(&mut self) {
        self.reference = None;
        self.assessment = Assessment::NotInitialized;
        tracing::info!("Reference cleared");
    }
}
