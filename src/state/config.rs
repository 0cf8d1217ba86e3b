//! Application configuration with persistence.
//!
//! # Configuration File Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/lazyrates/config.json`
//! - macOS: `~/Library/Application Support/lazyrates/config.json`
//! - Windows: `%APPDATA%/lazyrates/config.json`
//!
//! Every field is optional in the file; missing fields take their defaults.
//! Command line flags override whatever is loaded here.

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;

use crate::constants::{DEFAULT_LOAD_DELAY_MS, default_date};
use crate::domain::{SortDirection, SortField};

// ============================================================================
// Constants
// ============================================================================

/// Application name used for configuration directory.
const APP_NAME: &str = "lazyrates";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration structure for persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Quotation date whose partition is loaded.
    pub date: NaiveDate,
    /// Simulated load delay in milliseconds.
    pub load_delay_ms: u64,
    /// Fixture file to read instead of the bundled dataset.
    pub fixture: Option<PathBuf>,
    /// Initial sort field, restored on refresh.
    pub sort_field: SortField,
    /// Initial sort direction, restored on refresh.
    pub sort_direction: SortDirection,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            date: default_date(),
            load_delay_ms: DEFAULT_LOAD_DELAY_MS,
            fixture: None,
            sort_field: SortField::SortKey,
            sort_direction: SortDirection::Asc,
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration from disk, falling back to defaults.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration path cannot be determined
    /// - The file cannot be read
    /// - The JSON content cannot be parsed
    pub fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        let content = fs::read_to_string(&path)?;
        Self::from_json(&content)
    }

    /// Parses a configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a field has the wrong
    /// type.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Saves the configuration to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined or the file cannot
    /// be written.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// The configured load delay.
    #[must_use]
    pub const fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.date, NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());
        assert_eq!(config.load_delay(), Duration::from_millis(500));
        assert_eq!(config.fixture, None);
        assert_eq!(config.sort_field, SortField::SortKey);
        assert_eq!(config.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = AppConfig {
            date: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
            load_delay_ms: 0,
            fixture: Some(PathBuf::from("/tmp/rates.json")),
            sort_field: SortField::Rate,
            sort_direction: SortDirection::Desc,
        };

        let json = serde_json::to_string(&config).unwrap();
        let deserialized = AppConfig::from_json(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = AppConfig::from_json(r#"{"date":"2025-03-04"}"#).unwrap();
        assert_eq!(config.date, NaiveDate::from_ymd_opt(2025, 3, 4).unwrap());
        assert_eq!(config.load_delay_ms, DEFAULT_LOAD_DELAY_MS);
        assert_eq!(config.sort_field, SortField::SortKey);
    }

    #[rstest]
    #[case::bad_date(r#"{"date":"03.03.2025"}"#)]
    #[case::unknown_sort(r#"{"sort_field":"logo"}"#)]
    #[case::not_json("date = 2025-03-03")]
    fn test_invalid_config_is_rejected(#[case] json: &str) {
        assert!(AppConfig::from_json(json).is_err());
    }

    #[test]
    fn test_json_format() {
        let json = serde_json::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(json.contains(r#""date": "2025-03-03""#));
        assert!(json.contains(r#""sort_field": "sort_key""#));
        assert!(json.contains(r#""sort_direction": "asc""#));
    }

    #[test]
    fn test_config_path_has_json_extension() {
        if let Ok(path) = AppConfig::config_path() {
            let extension = path.extension().and_then(|e| e.to_str());
            assert_eq!(extension, Some("json"));
        }
    }
}
