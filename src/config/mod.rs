// SPDX-License-Identifier: MPL-2.0
//! This module handles the notification settings, including loading and saving
//! them to a `settings.toml` file.
//!
//! Every field is optional; missing fields fall back to the constants in
//! [`defaults`]. Values are clamped when converted into runtime
//! [`Settings`](crate::notifications::Settings).
//!
//! # Examples
//!
//! ```no_run
//! use toastkit::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.default_duration_ms = Some(2500);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use defaults::*;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "toastkit";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Queue capacity; older toasts are evicted beyond it.
    #[serde(default)]
    pub max_visible: Option<usize>,
    /// Auto-dismiss delay for toasts that don't set their own. `0` disables it.
    #[serde(default)]
    pub default_duration_ms: Option<u64>,
    /// Grace delay between dismissal and removal.
    #[serde(default)]
    pub removal_delay_ms: Option<u64>,
    /// Progress ticker period.
    #[serde(default)]
    pub progress_interval_ms: Option<u64>,
    #[serde(default)]
    pub diagnostics_buffer_capacity: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_visible: Some(DEFAULT_MAX_VISIBLE),
            default_duration_ms: Some(DEFAULT_DURATION_MS),
            removal_delay_ms: Some(DEFAULT_REMOVAL_DELAY_MS),
            progress_interval_ms: Some(DEFAULT_PROGRESS_INTERVAL_MS),
            diagnostics_buffer_capacity: Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
        }
    }
}

/// Returns `<config_dir>/toastkit/settings.toml`, if the platform has a config dir.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a config file. A file that isn't valid TOML yields the defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_timing() {
        let config = Config {
            max_visible: Some(3),
            default_duration_ms: Some(1500),
            removal_delay_ms: Some(800),
            progress_interval_ms: Some(50),
            diagnostics_buffer_capacity: None,
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "max_visible = 2\n").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.max_visible, Some(2));
        assert!(loaded.default_duration_ms.is_none());
        assert!(loaded.removal_delay_ms.is_none());
    }

    #[test]
    fn load_from_missing_file_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn default_config_uses_documented_timings() {
        let config = Config::default();
        assert_eq!(config.max_visible, Some(5));
        assert_eq!(config.default_duration_ms, Some(4000));
        assert_eq!(config.removal_delay_ms, Some(5000));
        assert_eq!(config.progress_interval_ms, Some(100));
    }
}
