//! Configuration module for newsvet
//!
//! Manages application configuration: the article-service base URL, the
//! result page size, the label universe presented for filtering, and the
//! quiet flag. Configuration is stored in the user's config directory.
//! Filter selections themselves are never persisted; a fresh session always
//! starts with every label selected.

use std::fs;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Default base URL of the article service
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/articles";

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

const fn default_page_size() -> usize {
    crate::results::DEFAULT_PAGE_SIZE
}

/// The deployment's label taxonomy, shown as filter boxes
///
/// Matches the classification labels the article service assigns.
fn default_labels() -> Vec<String> {
    [
        "mainstream",
        "conservative",
        "liberal",
        "local",
        "international",
        "business",
        "entertainment",
        "sports",
        "science",
        "opinion",
        "satire",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NewsvetConfig {
    /// Base URL of the article service API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Number of articles per result page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// The universal label set offered for filtering
    #[serde(default = "default_labels")]
    pub labels: Vec<String>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl Default for NewsvetConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            page_size: default_page_size(),
            labels: default_labels(),
            quiet: false,
        }
    }
}

impl NewsvetConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be
    /// determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("newsvet").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if absent
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or
    /// created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the
    /// configuration cannot be serialized, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` on serialization or filesystem failure.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_carry_eleven_labels() {
        let config = NewsvetConfig::default();

        assert_eq!(config.labels.len(), 11);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert!(!config.quiet);
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = NewsvetConfig::default();
        config.api_base_url = "http://news.example.org/api/articles".to_string();
        config.page_size = 25;
        config.quiet = true;

        config.save_to(&path).unwrap();
        let loaded = NewsvetConfig::load_from(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "page_size = 5\n").unwrap();

        let loaded = NewsvetConfig::load_from(&path).unwrap();

        assert_eq!(loaded.page_size, 5);
        assert_eq!(loaded.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(loaded.labels.len(), 11);
    }
}
