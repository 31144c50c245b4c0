//! # Intake Configuration
//!
//! Storage keys, the feedback display window and where on-disk data lives.
//! Every field has a default matching the browser build, so an empty or
//! missing YAML file yields a working configuration.
//!
//! ```yaml
//! reports_key: symptomReports
//! language_key: healthwatch-language
//! theme_key: theme
//! status_display_ms: 3000
//! default_language: en
//! data_directory: /var/lib/healthwatch   # optional override
//! ```

use anyhow::{Context, Result};
use chrono::Duration;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use shared::Language;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "HealthWatch";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    /// Key holding the JSON array of submitted reports
    pub reports_key: String,
    /// Key holding the chosen language code
    pub language_key: String,
    /// Key holding the chosen theme
    pub theme_key: String,
    /// How long the success / error banner stays up, in milliseconds
    pub status_display_ms: u64,
    pub default_language: Language,
    /// Override for the on-disk data directory
    pub data_directory: Option<PathBuf>,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            reports_key: "symptomReports".to_string(),
            language_key: "healthwatch-language".to_string(),
            theme_key: "theme".to_string(),
            status_display_ms: 3000,
            default_language: Language::English,
            data_directory: None,
        }
    }
}

impl IntakeConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).context("Failed to parse intake configuration")
    }

    /// Load configuration from `path`, falling back to defaults when the file
    /// does not exist. A file that exists but cannot be parsed is an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let yaml = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml_str(&yaml)?;
        if config.status_display_ms == 0 {
            warn!("⚠️ status_display_ms is 0; feedback banners will clear on the next tick");
        }
        Ok(config)
    }

    /// Directory for file-backed storage: the override when set, otherwise
    /// `<platform data dir>/HealthWatch`
    pub fn data_directory(&self) -> Option<PathBuf> {
        self.data_directory
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join(APP_NAME)))
    }

    pub fn status_display_window(&self) -> Duration {
        Duration::milliseconds(self.status_display_ms as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_browser_keys() {
        let config = IntakeConfig::default();
        assert_eq!(config.reports_key, "symptomReports");
        assert_eq!(config.language_key, "healthwatch-language");
        assert_eq!(config.theme_key, "theme");
        assert_eq!(config.status_display_window(), Duration::seconds(3));
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let config = IntakeConfig::from_yaml_str("status_display_ms: 1500\ndefault_language: hi\n").unwrap();
        assert_eq!(config.status_display_ms, 1500);
        assert_eq!(config.default_language, Language::Hindi);
        assert_eq!(config.reports_key, "symptomReports");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(IntakeConfig::from_yaml_str("  \n").unwrap(), IntakeConfig::default());
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        assert!(IntakeConfig::from_yaml_str("status_display_ms: soon").is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = IntakeConfig::load_or_default(temp_dir.path().join("healthwatch.yaml")).unwrap();
        assert_eq!(config, IntakeConfig::default());
    }

    #[test]
    fn test_load_or_default_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("healthwatch.yaml");
        fs::write(&path, "data_directory: /tmp/healthwatch-data\n").unwrap();

        let config = IntakeConfig::load_or_default(&path).unwrap();
        assert_eq!(config.data_directory(), Some(PathBuf::from("/tmp/healthwatch-data")));
    }
}
