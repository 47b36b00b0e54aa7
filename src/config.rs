//! Application configuration.
//!
//! Settings are read from a TOML file; every key is optional.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Accept `/` as an operator in expressions
    pub division: bool,
    /// Print results with thousand separators
    pub group_digits: bool,
    /// Maximum number of fractional digits printed
    pub precision: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            division: false,
            group_digits: true,
            precision: 10,
        }
    }
}

/// Get the config directory path
fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("calculator"))
}

/// Path of the default config file, `~/.config/calculator/config.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    config_dir()
        .map(|dir| dir.join("config.toml"))
        .ok_or(ConfigError::NoDirFound)
}

/// Read and parse a config file.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFailed)?;
    parse_config(&content)
}

/// Parse config file contents.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    toml::from_str(content).map_err(ConfigError::ParseFailed)
}

/// Load application config from ~/.config/calculator/config.toml
/// Returns None if the config file doesn't exist
/// Logs warning and returns None if reading or parsing fails
pub fn load_app_config() -> Option<AppConfig> {
    let config_path = default_config_path().ok()?;

    if !config_path.exists() {
        tracing::debug!("Config file not found at {:?}, using defaults", config_path);
        return None;
    }

    match load_config_from(&config_path) {
        Ok(config) => {
            tracing::debug!("Loaded app config from {:?}", config_path);
            Some(config)
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load config file at {:?}: {}, using defaults",
                config_path,
                e
            );
            None
        }
    }
}
