//! Query string and URL assembly
//!
//! Values are inserted verbatim: nothing is percent-encoded, so a value
//! containing `&` or `=` reaches the server exactly as written.

use serde_json::{Map, Value};

use crate::value::to_text;

/// Serializes parameters as `key=value` pairs joined with `&`, in mapping
/// order.
#[must_use]
pub fn query_string(params: &Map<String, Value>) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{key}={}", to_text(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Builds `{base}/{endpoint}?{query}`.
///
/// The `?` is always present, even with an empty query.
#[must_use]
pub fn build_url(base: &str, endpoint: &str, query: &str) -> String {
    format!("{base}/{endpoint}?{query}")
}
