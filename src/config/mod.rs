//! Configuration
//!
//! Layered application config: serde defaults, an optional TOML file, then
//! `SPORTSDESK__*` environment variables. CLI flags are applied on top by the
//! binary.

mod loader;

pub use loader::{ConfigLoader, DEFAULT_CONFIG_FILE, ENV_PREFIX};

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fallback data directory when no platform data directory exists.
pub const FALLBACK_DATA_DIR: &str = "data";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the data files live.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the JSON data files; None means the platform data directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// Configured directory, else the platform data directory, else `./data`.
    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            if !dir.as_os_str().is_empty() {
                return dir.clone();
            }
        }
        directories::ProjectDirs::from("", "sportsdesk", "sportsdesk")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
    }
}
