//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod environment_source;
mod http_client;

pub use environment_source::{EnvironmentSource, EnvironmentSourceError};
pub use http_client::{HttpClient, HttpClientError};
