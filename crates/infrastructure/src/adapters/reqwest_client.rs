//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! It handles all HTTP communication for the application.

use std::future::Future;
use std::time::{Duration, Instant};

use hookmock_application::ports::{HttpClient, HttpClientError};
use hookmock_domain::{HookRequest, HookResponse};
use indexmap::IndexMap;
use reqwest::{Client, Url};

/// HTTP client implementation using reqwest.
///
/// Wraps `reqwest::Client` and implements the `HttpClient` port from the
/// application layer.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
    timeout: Duration,
}

impl ReqwestHttpClient {
    /// Timeout applied when none is configured.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Creates a new HTTP client with default settings.
    ///
    /// Default configuration:
    /// - Request timeout: 30 seconds
    /// - Follow redirects: up to 10
    /// - User-Agent: "Hookmock/<version>"
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, HttpClientError> {
        Self::with_timeout(Self::DEFAULT_TIMEOUT)
    }

    /// Creates a new HTTP client with a custom request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(concat!("Hookmock/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self { client, timeout })
    }

    /// Maps reqwest errors to `HttpClientError`.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout { timeout_ms };
        }

        if error.is_connect() {
            let message = error.to_string();
            let source_message = std::error::Error::source(error)
                .map(ToString::to_string)
                .unwrap_or_default();
            if format!("{message} {source_message}")
                .to_lowercase()
                .contains("refused")
            {
                return HttpClientError::ConnectionRefused {
                    host: error
                        .url()
                        .and_then(Url::host_str)
                        .unwrap_or("unknown")
                        .to_string(),
                    port: error
                        .url()
                        .and_then(Url::port_or_known_default)
                        .unwrap_or(80),
                };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        HttpClientError::Other(error.to_string())
    }
}

impl HttpClient for ReqwestHttpClient {
    fn post(
        &self,
        request: &HookRequest,
    ) -> impl Future<Output = Result<HookResponse, HttpClientError>> + Send {
        // Clone what we need to move into the async block
        let url = request.url.clone();
        let headers = request.headers.clone();
        let payload = request.payload.clone();
        #[allow(clippy::cast_possible_truncation)]
        let timeout_ms = self.timeout.as_millis() as u64;

        async move {
            let parsed_url =
                Url::parse(&url).map_err(|e| HttpClientError::InvalidUrl(format!("{e}: {url}")))?;

            let start = Instant::now();

            let mut builder = self.client.post(parsed_url).timeout(self.timeout);
            for (name, value) in &headers {
                builder = builder.header(name, value);
            }

            // Content-Type is already among the headers, so `json` keeps it.
            let response = builder
                .json(&payload)
                .send()
                .await
                .map_err(|e| Self::map_error(&e, timeout_ms))?;

            let status = response.status().as_u16();
            let response_headers: IndexMap<String, String> = response
                .headers()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
                .collect();

            let body = response
                .text()
                .await
                .map_err(|e| HttpClientError::Other(format!("Failed to read body: {e}")))?;

            let response = HookResponse::new(status, response_headers, body, start.elapsed());
            if response.is_success() {
                Ok(response)
            } else {
                Err(HttpClientError::Status(Box::new(response)))
            }
        }
    }
}
