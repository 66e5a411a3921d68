// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Machine capability profiles
//!
//! A [`Profile`] carries the attributes the scorer compares. An
//! [`ExtendedProfile`] embeds one and adds descriptive attributes kept only
//! for diagnostics and export.

pub mod extended;
pub mod minimal;
pub mod types;

pub use extended::*;
pub use minimal::*;
pub use types::*;
