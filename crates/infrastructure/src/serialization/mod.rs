//! YAML deserialization for the hook config format.

mod yaml;

pub use yaml::*;
