//! Configuration loading utilities
//!
//! Read-only: a clock looks for `<name>.toml` in the platform config directory and
//! falls back to its defaults when there is none.

use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for configuration operations
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to determine config directory
    NoConfigDir,
    /// IO error while reading config
    Io(io::Error),
    /// Failed to parse config file
    Parse(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoConfigDir => write!(f, "Could not determine config directory"),
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::NoConfigDir => None,
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Get the base configuration directory for all watch faces
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "watchfaces", "analog").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the configuration file path for a specific clock
pub fn config_path(clock_name: &str) -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(format!("{}.toml", clock_name)))
}

/// Load configuration for a specific clock
///
/// Returns `None` if the config file doesn't exist yet.
/// Returns an error if the file exists but can't be parsed.
pub fn load_config<T: DeserializeOwned>(clock_name: &str) -> Result<Option<T>, ConfigError> {
    let path = config_path(clock_name).ok_or(ConfigError::NoConfigDir)?;
    load_config_from(&path)
}

/// Load configuration from an explicit path
pub fn load_config_from<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)?;
    let config: T = toml::from_str(&contents)?;
    Ok(Some(config))
}
