//! Panel configuration: remote name, timer intervals and credentials.
//!
//! Stored as JSON in the user config directory. Missing or unreadable config
//! degrades to defaults; a bad config file never blocks the panel.

use crate::core::dirs::get_config_directory;
use crate::core::error::Result;
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PanelConfig {
    /// Remote used for fetch/pull/push
    pub remote_name: String,
    /// Background fetch cycle length in seconds
    pub fetch_interval_secs: u64,
    /// Short delay before a status reconciliation in milliseconds
    pub status_delay_ms: u64,
    /// SSH private key for authenticated remotes
    pub ssh_key_path: Option<PathBuf>,
    /// Username for HTTPS remotes
    pub username: Option<String>,
    /// Access token for HTTPS remotes
    pub token: Option<String>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            remote_name: "origin".to_string(),
            fetch_interval_secs: 60,
            status_delay_ms: 500,
            ssh_key_path: None,
            username: None,
            token: None,
        }
    }
}

impl PanelConfig {
    /// Load the config file, falling back to defaults when it is missing
    /// or unparseable
    pub fn load_or_default() -> Self {
        let config_file = match get_config_directory() {
            Ok(dir) => dir.join("config.json"),
            Err(_) => return Self::default(),
        };

        if !config_file.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_file) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Ignoring malformed config {}: {}", config_file.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Could not read config {}: {}", config_file.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_dir = get_config_directory()?;
        std::fs::create_dir_all(&config_dir)?;

        let config_file = config_dir.join("config.json");
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_file, content)?;

        Ok(())
    }

    pub fn fetch_interval(&self) -> Duration {
        Duration::from_secs(self.fetch_interval_secs)
    }

    pub fn status_delay(&self) -> Duration {
        Duration::from_millis(self.status_delay_ms)
    }
}
