//! Hookmock Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus the config file loader.

pub mod adapters;
pub mod persistence;
pub mod serialization;

pub use adapters::{ProcessEnvironment, ReqwestHttpClient};
pub use persistence::{ConfigError, DEFAULT_CONFIG_FILE, load_config};
pub use serialization::{SerializationError, from_yaml};
