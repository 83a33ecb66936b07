//! JSON value helpers

use serde_json::Value;

/// Returns whether a value counts as present when injecting secrets.
///
/// `null`, `false`, zero and the empty string are absent; every other
/// value, including empty objects and arrays, is present.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Renders a value for a header or query string.
///
/// Strings are used verbatim, anything else as its JSON text.
#[must_use]
pub fn to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
