//! Database layer.
//!
//! [`StreakDb`] is the single storage facade used by services. It dispatches
//! to Firestore in production or to an in-memory store for local runs and
//! tests.

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryDb;

use crate::config::{Config, StorageBackend};
use crate::error::AppError;
use crate::models::{ActivityRecord, Device};

/// Collection names as constants.
pub mod collections {
    pub const DEVICES: &str = "devices";
    /// Daily activity records (keyed by `{device_id}_{date}`)
    pub const ACTIVITIES: &str = "activities";
}

#[derive(Clone)]
enum Backend {
    Firestore(FirestoreDb),
    Memory(MemoryDb),
}

/// Storage facade over the configured backend.
#[derive(Clone)]
pub struct StreakDb {
    backend: Backend,
}

impl StreakDb {
    /// Connect to the backend selected in the configuration.
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        match config.storage_backend {
            StorageBackend::Firestore => {
                let db = FirestoreDb::new(&config.gcp_project_id).await?;
                Ok(Self {
                    backend: Backend::Firestore(db),
                })
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage; data will not survive a restart");
                Ok(Self::in_memory())
            }
        }
    }

    /// A fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(MemoryDb::new()),
        }
    }

    pub async fn get_device(&self, device_id: &str) -> Result<Option<Device>, AppError> {
        match &self.backend {
            Backend::Firestore(db) => db.get_device(device_id).await,
            Backend::Memory(db) => Ok(db.get_device(device_id)),
        }
    }

    /// All activity records for a device, newest first.
    pub async fn get_activities_for_device(
        &self,
        device_id: &str,
    ) -> Result<Vec<ActivityRecord>, AppError> {
        match &self.backend {
            Backend::Firestore(db) => db.get_activities_for_device(device_id).await,
            Backend::Memory(db) => Ok(db.get_activities_for_device(device_id)),
        }
    }

    /// Store the device and one activity record together.
    pub async fn save_registration(
        &self,
        device: &Device,
        record: &ActivityRecord,
    ) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(db) => db.save_registration(device, record).await,
            Backend::Memory(db) => {
                db.save_registration(device, record);
                Ok(())
            }
        }
    }

    /// Delete a device and all of its activity records.
    pub async fn delete_device_data(&self, device_id: &str) -> Result<usize, AppError> {
        match &self.backend {
            Backend::Firestore(db) => db.delete_device_data(device_id).await,
            Backend::Memory(db) => Ok(db.delete_device_data(device_id)),
        }
    }
}
