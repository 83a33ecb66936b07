//! Process environment adapter.
//!
//! Reads variables from the real process environment and loads dotenv
//! files into it with `dotenvy`, which never overrides a variable that is
//! already set.

use std::path::Path;

use hookmock_application::ports::{EnvironmentSource, EnvironmentSourceError};

/// The current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl ProcessEnvironment {
    /// Creates a new `ProcessEnvironment`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl EnvironmentSource for ProcessEnvironment {
    fn load_file(&self, path: &Path) -> Result<(), EnvironmentSourceError> {
        dotenvy::from_path(path).map_err(|e| {
            if e.not_found() {
                EnvironmentSourceError::NotFound(path.to_path_buf())
            } else {
                EnvironmentSourceError::Load {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}
