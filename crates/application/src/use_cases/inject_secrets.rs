//! Secret injection

use hookmock_domain::{Config, SecretRef, is_truthy};
use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::FireError;
use crate::reporter::Reporter;

/// Injects `secrets` into `target`, overwriting existing keys.
///
/// Environment references are looked up in the config's resolved variable
/// table. A reference that is not there is reported and skipped. Values
/// that are empty, `false`, zero or `null` are never injected, so the key
/// stays absent instead of carrying an empty secret.
///
/// Returns one [`FireError::SecretResolution`] per skipped reference.
pub fn inject_secrets(
    config: &Config,
    target: &mut Map<String, Value>,
    secrets: &IndexMap<String, SecretRef>,
    reporter: &Reporter,
) -> Vec<FireError> {
    let mut failures = Vec::new();

    for (key, secret) in secrets {
        let value = match secret {
            SecretRef::Environment { environment } => {
                reporter.debug(format!("Replacing secret \"{key}\" with environment variable."));
                match config.variable(environment).filter(|v| !v.is_empty()) {
                    Some(resolved) => {
                        reporter.debug(format!(
                            "Replacing secret with environment variable: {environment}"
                        ));
                        Value::String(resolved.to_string())
                    }
                    None => {
                        let failure = FireError::SecretResolution(environment.clone());
                        reporter.hook(
                            "Environment",
                            format!("{failure} You may need to add it to your config file."),
                        );
                        failures.push(failure);
                        continue;
                    }
                }
            }
            SecretRef::Literal(value) => value.clone(),
        };

        if is_truthy(&value) {
            target.insert(key.clone(), value);
        }
    }

    failures
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use hookmock_domain::EnvironmentBlock;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn config(variables: &[(&str, &str)]) -> Config {
        Config {
            environment: Some(EnvironmentBlock {
                file: None,
                variables: variables
                    .iter()
                    .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                    .collect(),
            }),
            ..Config::default()
        }
    }

    fn secrets(entries: &[(&str, SecretRef)]) -> IndexMap<String, SecretRef> {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_literal_and_environment_secrets() {
        let config = config(&[("API_TOKEN", "s3cret")]);
        let mut target = Map::new();

        let failures = inject_secrets(
            &config,
            &mut target,
            &secrets(&[
                ("source", SecretRef::literal("mock")),
                ("token", SecretRef::environment("API_TOKEN")),
            ]),
            &Reporter::default(),
        );

        assert!(failures.is_empty());
        assert_eq!(Value::Object(target), json!({"source": "mock", "token": "s3cret"}));
    }

    #[test]
    fn test_unknown_environment_key_is_skipped() {
        let config = config(&[]);
        let mut target = Map::new();

        let failures = inject_secrets(
            &config,
            &mut target,
            &secrets(&[
                ("source", SecretRef::literal("mock")),
                ("token", SecretRef::environment("API_TOKEN")),
            ]),
            &Reporter::default(),
        );

        assert_eq!(failures.len(), 1);
        assert!(matches!(&failures[0], FireError::SecretResolution(key) if key == "API_TOKEN"));
        assert!(!target.contains_key("token"));
        assert_eq!(target.get("source"), Some(&json!("mock")));
    }

    #[test]
    fn test_no_environment_block_counts_as_missing() {
        let mut target = Map::new();

        let failures = inject_secrets(
            &Config::default(),
            &mut target,
            &secrets(&[("token", SecretRef::environment("API_TOKEN"))]),
            &Reporter::default(),
        );

        assert_eq!(failures.len(), 1);
        assert!(target.is_empty());
    }

    #[test]
    fn test_falsy_values_are_not_injected() {
        let mut target = Map::new();
        target.insert("kept".to_string(), json!("original"));

        inject_secrets(
            &Config::default(),
            &mut target,
            &secrets(&[
                ("empty", SecretRef::literal("")),
                ("zero", SecretRef::literal(0)),
                ("off", SecretRef::literal(false)),
                ("kept", SecretRef::literal("")),
            ]),
            &Reporter::default(),
        );

        assert_eq!(Value::Object(target), json!({"kept": "original"}));
    }

    #[test]
    fn test_secrets_overwrite_body_values() {
        let mut target = Map::new();
        target.insert("token".to_string(), json!("placeholder"));

        inject_secrets(
            &config(&[("T", "real")]),
            &mut target,
            &secrets(&[("token", SecretRef::environment("T"))]),
            &Reporter::default(),
        );

        assert_eq!(target.get("token"), Some(&json!("real")));
    }
}
