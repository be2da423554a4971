// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Device registration service.
//!
//! Handles the registration workflow:
//! 1. Load (or create) the device
//! 2. Record activity for the reference day
//! 3. Load the device's activity history
//! 4. Compute the current and longest streak
//! 5. Store the device and today's record together

use chrono::NaiveDate;

use crate::db::StreakDb;
use crate::error::{AppError, Result};
use crate::models::{ActivityRecord, Device, StreakResult};
use crate::services::streak::compute_streak;
use crate::time_utils::format_utc_rfc3339;

/// Client-reported details sent along with a registration.
#[derive(Debug, Clone, Default)]
pub struct DeviceInfo {
    pub platform: Option<String>,
    pub app_version: Option<String>,
}

/// Result of a registration call.
#[derive(Debug, Clone)]
pub struct RegistrationOutcome {
    pub device: Device,
    pub streak: StreakResult,
    /// True if this call created the device
    pub is_new_device: bool,
}

/// Registers devices and computes their streaks.
#[derive(Clone)]
pub struct RegistrationService {
    db: StreakDb,
}

impl RegistrationService {
    pub fn new(db: StreakDb) -> Self {
        Self { db }
    }

    /// Register a device as active on `today` and return its streak.
    ///
    /// Registering again on the same day rewrites the same activity record,
    /// so the streak does not change.
    pub async fn register(
        &self,
        device_id: &str,
        info: DeviceInfo,
        today: NaiveDate,
    ) -> Result<RegistrationOutcome> {
        let now = format_utc_rfc3339(chrono::Utc::now());

        let existing = self.db.get_device(device_id).await?;
        let is_new_device = existing.is_none();
        let mut device = existing.unwrap_or_else(|| Device::new(device_id, &now));

        device.last_seen = now.clone();
        if info.platform.is_some() {
            device.platform = info.platform;
        }
        if info.app_version.is_some() {
            device.app_version = info.app_version;
        }

        let record = ActivityRecord::new(device_id, today, now);

        let mut records = self.db.get_activities_for_device(device_id).await?;
        records.push(record.clone());

        let streak = compute_streak(&records, today);
        device.apply_streak(streak);

        self.db.save_registration(&device, &record).await?;

        tracing::info!(
            device_id,
            %today,
            is_new_device,
            current_streak = streak.current_streak,
            longest_streak = streak.longest_streak,
            "Device registered"
        );

        Ok(RegistrationOutcome {
            device,
            streak,
            is_new_device,
        })
    }

    /// Compute the streak for a known device without recording activity.
    pub async fn streak_for(
        &self,
        device_id: &str,
        reference_date: NaiveDate,
    ) -> Result<StreakResult> {
        self.require_device(device_id).await?;

        let records = self.db.get_activities_for_device(device_id).await?;
        Ok(compute_streak(&records, reference_date))
    }

    /// Distinct activity dates for a known device, newest first.
    pub async fn history(&self, device_id: &str) -> Result<Vec<NaiveDate>> {
        self.require_device(device_id).await?;

        let mut dates: Vec<NaiveDate> = self
            .db
            .get_activities_for_device(device_id)
            .await?
            .into_iter()
            .map(|r| r.date)
            .collect();
        dates.sort_unstable_by(|a, b| b.cmp(a));
        dates.dedup();
        Ok(dates)
    }

    /// Delete a device and its activity history.
    ///
    /// Returns the number of stored documents removed.
    pub async fn delete_device(&self, device_id: &str) -> Result<usize> {
        self.require_device(device_id).await?;

        let deleted = self.db.delete_device_data(device_id).await?;
        tracing::info!(device_id, deleted, "Device deleted");
        Ok(deleted)
    }

    async fn require_device(&self, device_id: &str) -> Result<Device> {
        self.db
            .get_device(device_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Device {} not found", device_id)))
    }
}
