//! Response of a dispatched hook

use std::time::Duration;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// HTTP response to a hook request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: IndexMap<String, String>,
    /// Response body as text
    pub body: String,
    /// Time from send to full body
    #[serde(with = "duration_millis")]
    pub duration: Duration,
}

impl HookResponse {
    /// Creates a response.
    #[must_use]
    pub fn new(
        status: u16,
        headers: IndexMap<String, String>,
        body: impl Into<String>,
        duration: Duration,
    ) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
            duration,
        }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    #[allow(clippy::cast_possible_truncation)]
    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success() {
        let ok = HookResponse::new(204, IndexMap::new(), "", Duration::ZERO);
        let missing = HookResponse::new(404, IndexMap::new(), "nope", Duration::ZERO);
        assert!(ok.is_success());
        assert!(!missing.is_success());
    }
}
