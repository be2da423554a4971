// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod device;
pub mod streak;

pub use activity::ActivityRecord;
pub use device::Device;
pub use streak::StreakResult;
