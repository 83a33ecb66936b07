//! Hook config file loader.
//!
//! The config is a YAML document read once per invocation.

use std::path::{Path, PathBuf};

use hookmock_domain::Config;
use tokio::fs;

use crate::serialization::{SerializationError, from_yaml};

/// Config file used when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "hooks.yaml";

/// Errors that can occur while loading the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Error loading config file: {} - {source}", .path.display())]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not a valid hook config.
    #[error("Error loading config file: {} - {source}", .path.display())]
    Parse {
        /// File that failed.
        path: PathBuf,
        /// Underlying parse error.
        source: SerializationError,
    },
}

/// Loads and parses a hook config.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub async fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    from_yaml(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
