// Analytics configuration
// TOML file under the platform config directory; defaults apply when absent

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine a config directory for this platform")]
    NoConfigDir,
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Settings for the analytics HTTP client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub retries: usize,
    pub retry_delay_ms: u64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.example.com/v2".to_string(),
            timeout_secs: 20,
            retries: 2,
            retry_delay_ms: 400,
        }
    }
}

impl AnalyticsConfig {
    /// Load the config from the platform config dir, falling back to
    /// defaults when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        let dirs = ProjectDirs::from("", "", "postplan").ok_or(ConfigError::NoConfigDir)?;
        Self::load_from_path(&dirs.config_dir().join("analytics.toml"))
    }

    /// Load the config from an explicit path. A missing file yields defaults;
    /// a present but malformed file is an error.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("no analytics config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
