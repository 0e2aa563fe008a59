//! # Configuration Persistence
//!
//! Load settings from disk and locate the local storage file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use taskboard_core::{LayoutConfig, DESKTOP_BREAKPOINT, OPEN_PROJECT_SIDEBAR_ON_NARROW_ENTRY};

/// Environment variable overriding [`Config::api_url`].
pub const API_URL_ENV: &str = "TASKBOARD_API_URL";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the Taskboard REST API.
    pub api_url: String,

    /// Upper bound, in seconds, on the startup token validation.
    pub validation_timeout_secs: u64,

    /// Whether entering a project page on a narrow window opens the
    /// project sidebar.
    pub open_project_sidebar_on_narrow_entry: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:8000/api".to_string(),
            validation_timeout_secs: 5,
            open_project_sidebar_on_narrow_entry: OPEN_PROJECT_SIDEBAR_ON_NARROW_ENTRY,
        }
    }
}

impl Config {
    /// Directory holding the config file and the local storage file.
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("taskboard"))
    }

    /// Returns the config file path.
    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.json"))
    }

    /// Path of the JSON file standing in for browser local storage.
    pub fn storage_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("storage.json"))
    }

    /// Loads configuration from disk, or returns default if not found.
    ///
    /// The `TASKBOARD_API_URL` environment variable takes precedence over
    /// the stored API URL.
    pub fn load() -> Self {
        let mut config = Self::load_file();
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                tracing::info!(%url, "Using API URL from environment");
                config.api_url = url;
            }
        }
        config
    }

    fn load_file() -> Self {
        let Some(path) = Self::config_path() else {
            tracing::warn!("Could not determine config directory");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(?path, "Config file not found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(contents) => Self::parse(&contents).unwrap_or_else(|e| {
                tracing::warn!(?path, error = %e, "Failed to parse config, using defaults");
                Self::default()
            }),
            Err(e) => {
                tracing::warn!(?path, error = %e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    fn parse(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    /// Timeout applied to the startup token validation.
    #[must_use]
    pub fn validation_timeout(&self) -> Duration {
        Duration::from_secs(self.validation_timeout_secs)
    }

    /// Layout tunables derived from this configuration.
    #[must_use]
    pub fn layout(&self) -> LayoutConfig {
        LayoutConfig {
            breakpoint: DESKTOP_BREAKPOINT,
            open_project_sidebar_on_narrow_entry: self.open_project_sidebar_on_narrow_entry,
        }
    }
}
