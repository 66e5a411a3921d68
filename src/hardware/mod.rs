// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Host hardware capture
//!
//! Everything the scorer knows about the machine it runs on comes through a
//! [`ProfileProvider`]. The default provider reads the OS with `sysinfo` and
//! layers user-supplied [`HostOverrides`] on top for the attributes the OS
//! cannot report.

pub mod detector;
pub mod overrides;
pub mod provider;

pub use detector::*;
pub use overrides::*;
pub use provider::*;
