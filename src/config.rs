//! Application configuration loaded from environment variables.
//!
//! A `.env` file is read first if present, so local development does not need
//! exported variables.

use std::env;
use std::str::FromStr;

/// Where device and activity documents are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Google Cloud Firestore (production, or the emulator locally)
    Firestore,
    /// Process-local maps; data is lost on restart
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "firestore" => Ok(StorageBackend::Firestore),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(ConfigError::Invalid {
                name: "STORAGE_BACKEND",
                value: other.to_string(),
            }),
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Storage backend selection
    pub storage_backend: StorageBackend,
    /// GCP project ID (Firestore backend only)
    pub gcp_project_id: String,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
}

impl Config {
    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            port: 8080,
            storage_backend: StorageBackend::Memory,
            gcp_project_id: "test-project".to_string(),
            frontend_url: "http://localhost:5173".to_string(),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let storage_backend = match env::var("STORAGE_BACKEND") {
            Ok(raw) => raw.parse()?,
            Err(_) => StorageBackend::Memory,
        };

        let gcp_project_id = match storage_backend {
            StorageBackend::Firestore => {
                env::var("GCP_PROJECT_ID").map_err(|_| ConfigError::Missing("GCP_PROJECT_ID"))?
            }
            StorageBackend::Memory => {
                env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string())
            }
        };

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            storage_backend,
            gcp_project_id,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}
