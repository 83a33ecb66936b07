//! Process environment port

use std::path::{Path, PathBuf};

/// Errors from loading an environment file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvironmentSourceError {
    /// The file does not exist.
    #[error("Environment file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be read or parsed.
    #[error("Failed to load environment file {}: {message}", .path.display())]
    Load {
        /// File that failed.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },
}

/// Access to the variables a hook's secrets are resolved from.
pub trait EnvironmentSource {
    /// Loads `KEY=VALUE` definitions from a dotenv-style file.
    ///
    /// Variables that are already set keep their value.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed.
    fn load_file(&self, path: &Path) -> Result<(), EnvironmentSourceError>;

    /// Returns the value of a variable, if set.
    fn var(&self, name: &str) -> Option<String>;
}
