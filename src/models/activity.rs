// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Daily activity record for storage and streak computation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of activity for a device.
///
/// Stored in Firestore at `activities/{device_id}_{date}`, so at most one
/// record exists per device per calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityRecord {
    /// Owning device
    pub device_id: String,
    /// Calendar day of the activity (`YYYY-MM-DD`)
    pub date: NaiveDate,
    /// Last time this day was touched (RFC3339)
    pub updated_at: String,
}

impl ActivityRecord {
    pub fn new(
        device_id: impl Into<String>,
        date: NaiveDate,
        updated_at: impl Into<String>,
    ) -> Self {
        Self {
            device_id: device_id.into(),
            date,
            updated_at: updated_at.into(),
        }
    }

    /// Document ID for this record, unique per (device, day).
    pub fn document_id(&self) -> String {
        activity_document_id(&self.device_id, self.date)
    }
}

/// Build the activity document ID for a device and day.
pub fn activity_document_id(device_id: &str, date: NaiveDate) -> String {
    format!("{}_{}", urlencoding::encode(device_id), date.format("%Y-%m-%d"))
}
