//! On-disk configuration for the client, stored as TOML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::app_dirs;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Base URL used when no configuration file exists.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000";

/// Errors that can occur while loading or writing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No platform config directory could be resolved.
    #[error(transparent)]
    AppDir(#[from] app_dirs::AppDirError),
    /// Failed to read the config file.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse the config file.
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Failed to write the config file.
    #[error("Failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to serialize the configuration for writing.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Client settings persisted in `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Base URL of the classification service.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Presentation thresholds for the confidence readout.
    #[serde(default)]
    pub confidence_bands: ConfidenceBands,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            confidence_bands: ConfidenceBands::default(),
        }
    }
}

/// Band boundaries for the confidence bar palette.
///
/// These are presentation constants, not derived thresholds; they mirror the
/// service UI's three-tier split.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ConfidenceBands {
    /// Confidence strictly below this value uses the low palette.
    #[serde(default = "default_low_max")]
    pub low_max: f64,
    /// Confidence at or above this value uses the high palette.
    #[serde(default = "default_high_min")]
    pub high_min: f64,
}

impl Default for ConfidenceBands {
    fn default() -> Self {
        Self {
            low_max: default_low_max(),
            high_min: default_high_min(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_low_max() -> f64 {
    50.0
}

fn default_high_min() -> f64 {
    80.0
}

/// Resolve the configuration file path inside the app root.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load configuration from disk, writing defaults on first run.
///
/// An endpoint that does not parse as an absolute URL is replaced with the
/// default so a bad edit never leaves the app unable to start.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    let path = config_path()?;
    if !path.exists() {
        let config = AppConfig::default();
        save_to_path(&config, &path)?;
        return Ok(config);
    }
    let mut config = load_from_path(&path)?;
    if Url::parse(&config.endpoint).is_err() {
        tracing::warn!(
            "Configured endpoint {:?} is not a valid URL; using {DEFAULT_ENDPOINT}",
            config.endpoint
        );
        config.endpoint = default_endpoint();
    }
    Ok(config)
}

fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn save_to_path(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    let text = toml::to_string_pretty(config)?;
    std::fs::write(path, text).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}
