//! Hookmock Domain - Core business types
//!
//! This crate defines the domain model for Hookmock: the hook
//! configuration document, the fully resolved request that gets
//! dispatched, and the response it produces.
//! All types here are pure Rust with no I/O dependencies.

pub mod config;
pub mod request;
pub mod response;
pub mod settings;
pub mod value;

pub use config::{Config, EnvironmentBlock, FieldSpec, Hook, SecretRef, Server};
pub use request::{HookRequest, build_url, merge_headers, query_string};
pub use response::HookResponse;
pub use settings::OutputSettings;
pub use value::{is_truthy, to_text};
