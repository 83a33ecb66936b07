//! HTTP Client port

use std::future::Future;

use hookmock_domain::{HookRequest, HookResponse};
use thiserror::Error;

/// Errors from sending a hook request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpClientError {
    /// The URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// No response arrived in time.
    #[error("Request timed out after {timeout_ms}ms")]
    Timeout {
        /// Timeout that elapsed.
        timeout_ms: u64,
    },

    /// The server refused the connection.
    #[error("Connection refused: {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// The connection could not be established.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The server answered with a non-2xx status.
    #[error("Request failed with status code {}", .0.status)]
    Status(Box<HookResponse>),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

impl HttpClientError {
    /// Returns the response when the server answered.
    #[must_use]
    pub fn response(&self) -> Option<&HookResponse> {
        match self {
            Self::Status(response) => Some(response),
            _ => None,
        }
    }
}

/// Port for sending hook requests.
///
/// This trait abstracts the HTTP client implementation, allowing
/// the application layer to be independent of specific HTTP libraries.
pub trait HttpClient: Send + Sync + 'static {
    /// POSTs the request's JSON payload with its headers.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, timeout, or a non-2xx status.
    fn post(
        &self,
        request: &HookRequest,
    ) -> impl Future<Output = Result<HookResponse, HttpClientError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use std::time::Duration;

    #[test]
    fn test_status_error_exposes_response() {
        let response = HookResponse::new(500, IndexMap::new(), "boom", Duration::ZERO);
        let error = HttpClientError::Status(Box::new(response));

        assert_eq!(error.to_string(), "Request failed with status code 500");
        assert_eq!(error.response().map(|r| r.body.as_str()), Some("boom"));
        assert!(HttpClientError::Other("x".into()).response().is_none());
    }
}
