//! Device model for storage and API.

use serde::{Deserialize, Serialize};

use crate::models::StreakResult;

/// Registered device stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Device {
    /// Client-supplied device identifier (also used as document ID)
    pub device_id: String,
    /// Platform reported by the client (e.g. "ios", "android")
    #[serde(default)]
    pub platform: Option<String>,
    /// Client application version
    #[serde(default)]
    pub app_version: Option<String>,
    /// When the device first registered
    pub created_at: String,
    /// Last registration timestamp
    pub last_seen: String,
    /// Current streak as of the last registration
    #[serde(default)]
    pub current_streak: u32,
    /// Longest streak as of the last registration
    #[serde(default)]
    pub longest_streak: u32,
}

impl Device {
    /// A freshly registered device with no streak yet.
    pub fn new(device_id: impl Into<String>, now: &str) -> Self {
        Self {
            device_id: device_id.into(),
            platform: None,
            app_version: None,
            created_at: now.to_string(),
            last_seen: now.to_string(),
            current_streak: 0,
            longest_streak: 0,
        }
    }

    /// Store the result of a streak computation on the device.
    pub fn apply_streak(&mut self, streak: StreakResult) {
        self.current_streak = streak.current_streak;
        self.longest_streak = streak.longest_streak;
    }
}
