//! User settings
//!
//! Display preferences and the few tunables of the state holder. Every field
//! has a default, so a partial or older `config.json` still loads.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::money::DEFAULT_SYMBOL;
use crate::storage::file_io::write_json_atomic;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown in front of amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Transactions per page in the list view
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Number of recent transactions on the dashboard
    #[serde(default = "default_recent_count")]
    pub recent_count: usize,

    /// Seconds a notification stays visible
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    DEFAULT_SYMBOL.to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_page_size() -> usize {
    10
}

fn default_recent_count() -> usize {
    5
}

fn default_notification_secs() -> u64 {
    3
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            page_size: default_page_size(),
            recent_count: default_recent_count(),
            notification_secs: default_notification_secs(),
        }
    }
}

impl Settings {
    /// Notification lifetime as a duration
    pub fn notification_duration(&self) -> Duration {
        Duration::from_secs(self.notification_secs)
    }

    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        let mut settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))?;

        if settings.page_size == 0 {
            settings.page_size = default_page_size();
        }
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
