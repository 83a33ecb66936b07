//! YAML helpers.

use serde::de::DeserializeOwned;

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// YAML deserialization failed.
    #[error("YAML deserialization failed: {0}")]
    Deserialize(#[from] serde_yaml::Error),
}

/// Deserializes YAML from a string.
///
/// # Errors
///
/// Returns an error if the YAML is invalid or doesn't match the expected type.
pub fn from_yaml<T: DeserializeOwned>(yaml: &str) -> Result<T, SerializationError> {
    Ok(serde_yaml::from_str(yaml)?)
}
