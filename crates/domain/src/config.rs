//! Hook configuration document
//!
//! Mirrors the YAML file a user writes:
//!
//! ```yaml
//! servers:
//!   local:
//!     name: Local API
//!     url: http://localhost:3000
//! hooks:
//!   order-created:
//!     server: local
//!     endpoint: webhooks/orders
//!     payload:
//!       body: { id: 42 }
//!       secrets:
//!         token: { environment: API_TOKEN }
//! groups:
//!   orders: [order-created]
//! environment:
//!   file: .env
//!   variables:
//!     API_TOKEN: ORDERS_API_TOKEN
//! ```
//!
//! Every mapping keeps the order it was written in.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Top-level configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Target servers, keyed by the name hooks refer to them with.
    #[serde(default, deserialize_with = "null_as_default")]
    pub servers: IndexMap<String, Server>,

    /// Hook definitions, keyed by hook name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub hooks: IndexMap<String, Hook>,

    /// Named, ordered lists of hook names.
    #[serde(default, deserialize_with = "null_as_default")]
    pub groups: IndexMap<String, Vec<String>>,

    /// Optional environment block used to resolve secrets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<EnvironmentBlock>,
}

impl Config {
    /// Returns the hook with the given name.
    #[must_use]
    pub fn hook(&self, name: &str) -> Option<&Hook> {
        self.hooks.get(name)
    }

    /// Returns the server with the given key.
    #[must_use]
    pub fn server(&self, key: &str) -> Option<&Server> {
        self.servers.get(key)
    }

    /// Returns the members of a group, in firing order.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&[String]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    /// Returns hook names in the order they were declared.
    pub fn hook_names(&self) -> impl Iterator<Item = &str> {
        self.hooks.keys().map(String::as_str)
    }

    /// Looks up a variable in the environment block.
    ///
    /// After environment resolution this is the resolved value; before it,
    /// the name of the process variable it maps to.
    #[must_use]
    pub fn variable(&self, key: &str) -> Option<&str> {
        self.environment
            .as_ref()
            .and_then(|env| env.variables.get(key))
            .map(String::as_str)
    }
}

/// A server hooks can be fired at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    /// Display name, used in log lines.
    #[serde(default)]
    pub name: String,
    /// Base URL, without a trailing slash. Empty when the entry has none.
    #[serde(default)]
    pub url: String,
}

impl Server {
    /// Creates a new server.
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// A named webhook definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hook {
    /// Key into [`Config::servers`].
    #[serde(default)]
    pub server: String,
    /// Path appended to the server URL.
    #[serde(default)]
    pub endpoint: String,
    /// JSON body template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<FieldSpec>,
    /// Header template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<FieldSpec>,
    /// Query parameter template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_params: Option<FieldSpec>,
}

impl Hook {
    /// Creates a hook targeting `server` at `endpoint` with no templates.
    #[must_use]
    pub fn new(server: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Sets the payload template.
    #[must_use]
    pub fn with_payload(mut self, payload: FieldSpec) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Sets the header template.
    #[must_use]
    pub fn with_headers(mut self, headers: FieldSpec) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Sets the query parameter template.
    #[must_use]
    pub fn with_query_params(mut self, query_params: FieldSpec) -> Self {
        self.query_params = Some(query_params);
        self
    }
}

/// Template shared by payloads, headers and query parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Literal mapping, or a file path when `file` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,

    /// Marks `body` as the path of a JSON file holding the payload.
    #[serde(default)]
    pub file: bool,

    /// Values to inject on top of `body`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secrets: Option<IndexMap<String, SecretRef>>,
}

impl FieldSpec {
    /// Creates a template from a literal body.
    #[must_use]
    pub fn body(body: Value) -> Self {
        Self {
            body: Some(body),
            ..Self::default()
        }
    }

    /// Creates a payload template read from a JSON file.
    #[must_use]
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            body: Some(Value::String(path.into())),
            file: true,
            secrets: None,
        }
    }

    /// Adds a secret to inject.
    #[must_use]
    pub fn with_secret(mut self, key: impl Into<String>, secret: SecretRef) -> Self {
        self.secrets
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), secret);
        self
    }

    /// Returns the body as a mapping, or an empty mapping when absent or
    /// not an object.
    #[must_use]
    pub fn body_map(&self) -> Map<String, Value> {
        match &self.body {
            Some(Value::Object(map)) => map.clone(),
            _ => Map::new(),
        }
    }
}

/// A value to inject into a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SecretRef {
    /// Resolved through [`EnvironmentBlock::variables`].
    Environment {
        /// Key in the environment block's variable table.
        environment: String,
    },
    /// Used as written.
    Literal(Value),
}

impl SecretRef {
    /// Creates a reference to an environment block variable.
    #[must_use]
    pub fn environment(key: impl Into<String>) -> Self {
        Self::Environment {
            environment: key.into(),
        }
    }

    /// Creates a literal secret.
    #[must_use]
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }
}

/// Environment block of the configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentBlock {
    /// Dotenv-style file loaded into the process environment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Config key to process environment variable name. Holds the resolved
    /// value once the environment has been resolved.
    #[serde(default, deserialize_with = "null_as_default")]
    pub variables: IndexMap<String, String>,
}

/// Treats an explicit YAML `null` (an empty section) as the default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const SAMPLE: &str = r"
servers:
  local:
    name: Local API
    url: http://localhost:3000
hooks:
  zeta:
    server: local
    endpoint: z
  alpha:
    server: local
    endpoint: webhooks/orders
    payload:
      body:
        id: 42
      secrets:
        token:
          environment: API_TOKEN
        source: mock
    queryParams:
      body:
        b: 2
        a: 1
groups:
  all: [zeta, alpha]
environment:
  file: .env
  variables:
    API_TOKEN: ORDERS_API_TOKEN
";

    fn sample() -> Config {
        serde_yaml::from_str(SAMPLE).expect("sample should parse")
    }

    #[test]
    fn test_hooks_keep_declaration_order() {
        let config = sample();
        assert_eq!(config.hook_names().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_secret_refs_parse_both_shapes() {
        let config = sample();
        let secrets = config.hooks["alpha"]
            .payload
            .as_ref()
            .and_then(|p| p.secrets.clone())
            .expect("secrets present");

        assert_eq!(secrets["token"], SecretRef::environment("API_TOKEN"));
        assert_eq!(secrets["source"], SecretRef::literal("mock"));
    }

    #[test]
    fn test_query_params_use_camel_case_key() {
        let config = sample();
        let query = config.hooks["alpha"].query_params.as_ref().expect("query");
        let keys: Vec<_> = query.body_map().keys().cloned().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_variable_lookup() {
        let config = sample();
        assert_eq!(config.variable("API_TOKEN"), Some("ORDERS_API_TOKEN"));
        assert_eq!(config.variable("MISSING"), None);
        assert_eq!(config.group("all").map(<[String]>::len), Some(2));
    }

    #[test]
    fn test_empty_sections_default() {
        let config: Config = serde_yaml::from_str("hooks:\nservers:\n").unwrap();
        assert!(config.hooks.is_empty());
        assert!(config.servers.is_empty());
        assert!(config.groups.is_empty());
        assert!(config.environment.is_none());
    }

    #[test]
    fn test_server_without_url_still_parses() {
        let config: Config = serde_yaml::from_str(
            "servers:\n  broken:\n    name: Broken\n  ok:\n    url: http://ok\n",
        )
        .unwrap();

        assert_eq!(config.server("broken").map(|s| s.url.as_str()), Some(""));
        assert_eq!(config.server("ok").map(|s| s.url.as_str()), Some("http://ok"));
    }

    #[test]
    fn test_body_map_ignores_non_objects() {
        assert!(FieldSpec::file("payload.json").body_map().is_empty());
        assert!(FieldSpec::default().body_map().is_empty());
        assert_eq!(
            FieldSpec::body(json!({"x": "y"})).body_map().get("x"),
            Some(&json!("y"))
        );
    }

    #[test]
    fn test_with_secret_builds_mapping() {
        let spec = FieldSpec::default()
            .with_secret("a", SecretRef::literal("1"))
            .with_secret("b", SecretRef::environment("B"));
        assert_eq!(spec.secrets.map(|s| s.len()), Some(2));
    }
}
