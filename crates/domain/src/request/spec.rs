//! Resolved hook request

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A hook resolved against its server, with secrets injected.
///
/// Always sent as a POST with a JSON body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookRequest {
    /// Name of the hook this request was built from.
    pub hook: String,
    /// Key of the target server.
    pub server: String,
    /// Display name of the target server.
    pub server_name: String,
    /// Full target URL, query string included.
    pub url: String,
    /// JSON body.
    pub payload: Value,
    /// Headers, `Content-Type` included.
    pub headers: IndexMap<String, String>,
}

impl HookRequest {
    /// Returns a header value by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns the log label `server::name::url`.
    #[must_use]
    pub fn target_label(&self) -> String {
        format!("{}::{}::{}", self.server, self.server_name, self.url)
    }
}
