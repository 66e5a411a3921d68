// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Capability scoring
//!
//! Compares a user [`Profile`](crate::profile::Profile) against a reference
//! profile and produces a composite score, GPU and CPU sub-scores and a list
//! of compatibility warnings. The comparison is a rough approximation over
//! self-reported attributes, not a performance benchmark.

pub mod scorer;
pub mod warnings;
pub mod weights;

pub use scorer::*;
pub use warnings::*;
pub use weights::*;
