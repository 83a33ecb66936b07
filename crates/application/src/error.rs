//! Application error types

use thiserror::Error;

use crate::ports::HttpClientError;

/// Everything that can stop a hook, a group or a whole command.
///
/// Only [`FireError::ConfigLoad`] and [`FireError::NoConfig`] abort a
/// command; every other variant aborts a single unit of work.
#[derive(Debug, Clone, Error)]
pub enum FireError {
    /// The config file is missing, unreadable or malformed.
    #[error("{0}")]
    ConfigLoad(String),

    /// A section the operation needs is absent from the config.
    #[error("No {0} found in config.")]
    MissingConfigSection(&'static str),

    /// The requested hook is not defined.
    #[error("No hook found with name: {0}.")]
    HookNotFound(String),

    /// The hook points at a server that is not defined.
    #[error("No server found with name: {0}.")]
    ServerNotFound(String),

    /// The hook's server has no base URL.
    #[error("No url found for server: {0}.")]
    ServerUrlMissing(String),

    /// The requested group is not defined.
    #[error("No group found with name: {0}.")]
    GroupNotFound(String),

    /// The payload file could not be read or is not valid JSON.
    #[error("{message}: {path}")]
    PayloadFile {
        /// Path as written in the config.
        path: String,
        /// What went wrong.
        message: String,
    },

    /// A secret refers to an environment variable the config does not hold.
    #[error("No environment variable found in config for: environment.variable:\"{0}\".")]
    SecretResolution(String),

    /// The request was sent but did not succeed.
    #[error("{0}")]
    Request(#[from] HttpClientError),

    /// The task sending the request stopped before producing a response.
    #[error("Webhook dispatch did not complete: {0}")]
    Dispatch(String),

    /// An operation ran without a loaded config.
    #[error("No config loaded.")]
    NoConfig,
}

/// Result type alias for application operations.
pub type FireResult<T> = Result<T, FireError>;
