//! Configuration file and path resolution.
//!
//! Settings come from, in order of precedence: command-line flags (or their
//! environment variables), `config.toml` in the user config directory, and
//! built-in defaults.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::constants;

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Backing file path. Relative paths are resolved against the config
    /// file's directory.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    /// Maximum number of bicycles.
    #[serde(default)]
    pub capacity: Option<usize>,
    /// Default log filter when `RUST_LOG` is unset.
    #[serde(default)]
    pub log_level: Option<String>,
    /// Interactive screen refresh interval.
    #[serde(default)]
    pub tick_rate_ms: Option<u64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Config {
    /// Load `path`, returning defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        toml::from_str(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Fully resolved settings used by the rest of the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub config_path: PathBuf,
    pub data_file: PathBuf,
    pub capacity: usize,
    pub log_level: String,
    pub tick_rate_ms: u64,
}

impl Settings {
    /// Merge a loaded [`Config`] with command-line overrides.
    pub fn resolve(config: Config, config_path: &Path, data_file_override: Option<PathBuf>) -> Self {
        let data_file = data_file_override
            .or_else(|| config.data_file.map(|p| resolve_path(config_path, &p)))
            .unwrap_or_else(|| data_dir().join(constants::DATA_FILE_NAME));

        Self {
            config_path: config_path.to_path_buf(),
            data_file,
            capacity: config.capacity.unwrap_or(constants::MAX_BICYCLES),
            log_level: config
                .log_level
                .unwrap_or_else(|| constants::DEFAULT_LOG_LEVEL.to_string()),
            tick_rate_ms: config.tick_rate_ms.unwrap_or(constants::DEFAULT_TICK_RATE),
        }
    }
}

/// Resolve a path relative to the config file directory.
///
/// Absolute paths are returned as-is.
pub fn resolve_path(config_path: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }

    let config_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    config_dir.join(path)
}

/// Default location of `config.toml`.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(constants::APP_NAME)
        .join(constants::CONFIG_FILE_NAME)
}

/// Directory holding the default backing file and the logs.
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(constants::APP_NAME)
}
