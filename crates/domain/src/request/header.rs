//! Header assembly

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::value::to_text;

/// Name of the content type header.
pub const CONTENT_TYPE: &str = "Content-Type";

/// Content type sent unless a hook overrides it.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Merges hook headers over the default `Content-Type: application/json`.
///
/// A hook header named `content-type` in any casing replaces the default.
#[must_use]
pub fn merge_headers(custom: &Map<String, Value>) -> IndexMap<String, String> {
    let mut headers = IndexMap::new();

    let overrides_content_type = custom
        .keys()
        .any(|name| name.eq_ignore_ascii_case(CONTENT_TYPE));
    if !overrides_content_type {
        headers.insert(CONTENT_TYPE.to_string(), JSON_CONTENT_TYPE.to_string());
    }

    for (name, value) in custom {
        headers.insert(name.clone(), to_text(value));
    }

    headers
}
