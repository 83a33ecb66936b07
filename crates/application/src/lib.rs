//! Hookmock Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (HTTP transport, process environment)
//! - The resolution pipeline: environment, secrets, request building
//! - Dispatch of hooks and groups
//! - Application-level error handling

pub mod error;
pub mod ports;
pub mod reporter;
pub mod use_cases;

pub use error::{FireError, FireResult};
pub use ports::{EnvironmentSource, EnvironmentSourceError, HttpClient, HttpClientError};
pub use reporter::Reporter;
pub use use_cases::{
    BuildRequest, Dispatches, FireHooks, FireOutcome, ResolveEnvironment,
    ResolveEnvironmentOutput, inject_secrets, list_hooks,
};
