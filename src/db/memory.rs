//! In-memory storage backend for local development and tests.
//!
//! Mirrors the Firestore document layout: devices keyed by device ID and
//! activities keyed by `{device_id}_{date}`.

use dashmap::DashMap;
use std::sync::Arc;

use crate::models::{ActivityRecord, Device};

/// Process-local document store.
#[derive(Clone, Default)]
pub struct MemoryDb {
    devices: Arc<DashMap<String, Device>>,
    activities: Arc<DashMap<String, ActivityRecord>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_device(&self, device_id: &str) -> Option<Device> {
        self.devices.get(device_id).map(|d| d.value().clone())
    }

    pub fn upsert_device(&self, device: &Device) {
        self.devices
            .insert(device.device_id.clone(), device.clone());
    }

    /// All activity records for a device, newest first.
    pub fn get_activities_for_device(&self, device_id: &str) -> Vec<ActivityRecord> {
        let mut records: Vec<ActivityRecord> = self
            .activities
            .iter()
            .filter(|entry| entry.value().device_id == device_id)
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by(|a, b| b.date.cmp(&a.date));
        records
    }

    pub fn save_registration(&self, device: &Device, record: &ActivityRecord) {
        self.activities.insert(record.document_id(), record.clone());
        self.upsert_device(device);
    }

    /// Remove a device and its activities, returning the number of entries removed.
    pub fn delete_device_data(&self, device_id: &str) -> usize {
        let before = self.activities.len();
        self.activities
            .retain(|_, record| record.device_id != device_id);
        let mut deleted = before.saturating_sub(self.activities.len());

        if self.devices.remove(device_id).is_some() {
            deleted += 1;
        }
        deleted
    }
}
