//! Build request use case
//!
//! Turns a hook name into a [`HookRequest`]: server lookup, payload
//! (inline or from a JSON file), headers and query string, with secrets
//! injected into each.

use hookmock_domain::{
    Config, FieldSpec, HookRequest, build_url, is_truthy, merge_headers, query_string,
};
use serde_json::{Map, Value};
use tokio::fs;

use crate::error::{FireError, FireResult};
use crate::reporter::Reporter;
use crate::use_cases::inject_secrets;

/// Resolves hooks into requests ready to dispatch.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildRequest {
    reporter: Reporter,
}

impl BuildRequest {
    /// Creates a new `BuildRequest` use case.
    #[must_use]
    pub const fn new(reporter: Reporter) -> Self {
        Self { reporter }
    }

    /// Builds the request for `hook_name`.
    ///
    /// Unresolved secrets are reported but do not stop the build.
    ///
    /// # Errors
    /// - [`FireError::HookNotFound`] if the hook is not defined
    /// - [`FireError::ServerNotFound`] if its server is not defined
    /// - [`FireError::ServerUrlMissing`] if its server has no URL
    /// - [`FireError::PayloadFile`] if a payload file cannot be read or parsed
    pub async fn execute(&self, config: &Config, hook_name: &str) -> FireResult<HookRequest> {
        let Some(hook) = config.hook(hook_name) else {
            let error = FireError::HookNotFound(hook_name.to_string());
            self.reporter.hook(hook_name, &error);
            return Err(error);
        };

        self.reporter.hook(hook_name, "Firing webhook.");

        let Some(server) = config.server(&hook.server) else {
            let error = FireError::ServerNotFound(hook.server.clone());
            self.reporter.hook(hook_name, &error);
            return Err(error);
        };
        if server.url.is_empty() {
            let error = FireError::ServerUrlMissing(hook.server.clone());
            self.reporter.hook(hook_name, &error);
            return Err(error);
        }

        let mut payload = self.payload(hook_name, hook.payload.as_ref()).await?;
        let mut unresolved = Vec::new();

        if let Some(secrets) = hook.payload.as_ref().and_then(|p| p.secrets.as_ref()) {
            if let Value::Object(body) = &mut payload {
                self.reporter.debug("Adding payload secrets to payload body.");
                unresolved.extend(inject_secrets(config, body, secrets, &self.reporter));
            } else {
                self.reporter
                    .verbose(format!("Payload for hook {hook_name} is not an object; secrets not added."));
            }
        }

        let mut headers = Self::template(hook.headers.as_ref());
        if let Some(secrets) = hook.headers.as_ref().and_then(|h| h.secrets.as_ref()) {
            self.reporter.debug("Adding header secrets to header body.");
            unresolved.extend(inject_secrets(config, &mut headers, secrets, &self.reporter));
        }

        let mut query = Self::template(hook.query_params.as_ref());
        if let Some(secrets) = hook.query_params.as_ref().and_then(|q| q.secrets.as_ref()) {
            self.reporter
                .debug("Adding query param secrets to query param body.");
            unresolved.extend(inject_secrets(config, &mut query, secrets, &self.reporter));
        }

        if !unresolved.is_empty() {
            self.reporter.verbose(format!(
                "Firing hook {hook_name} without {} unresolved secret(s).",
                unresolved.len()
            ));
        }

        self.reporter
            .debug(format!("Query Params: {}", Value::Object(query.clone())));

        let url = build_url(&server.url, &hook.endpoint, &query_string(&query));
        let request = HookRequest {
            hook: hook_name.to_string(),
            server: hook.server.clone(),
            server_name: server.name.clone(),
            url,
            payload,
            headers: merge_headers(&headers),
        };

        self.reporter.hook(
            hook_name,
            format!("Firing webhook to server: {}", request.target_label()),
        );
        self.reporter.debug(format!("Payload: {}", request.payload));
        self.reporter.debug(format!("Headers: {}", Value::Object(headers)));

        Ok(request)
    }

    /// Resolves the payload body, reading it from disk in file mode.
    async fn payload(&self, hook_name: &str, spec: Option<&FieldSpec>) -> FireResult<Value> {
        let payload = match spec {
            Some(spec) if spec.file => self.read_payload_file(hook_name, spec).await?,
            Some(spec) => spec.body.clone().filter(is_truthy).unwrap_or_default(),
            None => Value::Null,
        };

        if is_truthy(&payload) {
            Ok(payload)
        } else {
            self.reporter.verbose(format!(
                "No payload found for hook: {hook_name}. Continuing without payload."
            ));
            Ok(Value::Object(Map::new()))
        }
    }

    async fn read_payload_file(&self, hook_name: &str, spec: &FieldSpec) -> FireResult<Value> {
        let path = match &spec.body {
            Some(Value::String(path)) => path.clone(),
            other => other.as_ref().map(ToString::to_string).unwrap_or_default(),
        };

        self.reporter
            .verbose(format!("Retrieving payload from file: {path}"));

        let fail = |message: &str| {
            let error = FireError::PayloadFile {
                path: path.clone(),
                message: message.to_string(),
            };
            self.reporter.hook(hook_name, &error);
            error
        };

        let contents = fs::read_to_string(&path)
            .await
            .map_err(|_| fail("Error loading payload file"))?;
        serde_json::from_str(&contents).map_err(|_| fail("Error parsing payload file"))
    }

    fn template(spec: Option<&FieldSpec>) -> Map<String, Value> {
        spec.map(FieldSpec::body_map).unwrap_or_default()
    }
}
