// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod registration;
pub mod streak;

pub use registration::{DeviceInfo, RegistrationOutcome, RegistrationService};
pub use streak::{compute_streak, compute_streak_from_dates};
