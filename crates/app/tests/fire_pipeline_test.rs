//! End-to-end tests: config file on disk, dotenv-resolved secrets, and
//! real HTTP requests against a local mock server.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::Path;
use std::sync::Arc;

use hookmock_application::{FireError, FireHooks, Reporter, ResolveEnvironment};
use hookmock_domain::Config;
use hookmock_infrastructure::{ProcessEnvironment, ReqwestHttpClient, load_config};
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::{TempDir, tempdir};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Writes a config pointing at `server_url`, plus its dotenv and payload
/// files, into a fresh temp directory.
fn write_workspace(server_url: &str) -> TempDir {
    let dir = tempdir().expect("Failed to create temp directory");
    let env_path = dir.path().join(".env");
    let payload_path = dir.path().join("payload.json");

    std::fs::write(&env_path, "HOOKMOCK_IT_SIGNING_KEY_5A9C=from-dotenv\n").expect("write env");
    std::fs::write(&payload_path, r#"{"event": "order.created", "id": 7}"#).expect("write payload");

    let config = format!(
        r#"servers:
  local:
    name: Local
    url: {server_url}
  gone:
    name: Gone
    url: http://127.0.0.1:1
  unfinished:
    name: Unfinished
hooks:
  created:
    server: local
    endpoint: orders
    payload:
      body: {payload}
      file: true
      secrets:
        signature:
          environment: SIGNING_KEY
    headers:
      body:
        X-Source: hookmock
      secrets:
        X-Key:
          environment: SIGNING_KEY
  refunded:
    server: local
    endpoint: refunds
    payload:
      body:
        id: 9
  orphan:
    server: nowhere
    endpoint: x
  stray:
    server: unfinished
    endpoint: y
groups:
  orders: [created, orphan, refunded]
environment:
  file: {env}
  variables:
    SIGNING_KEY: HOOKMOCK_IT_SIGNING_KEY_5A9C
    UNSET: HOOKMOCK_IT_NEVER_SET_77E1
"#,
        payload = payload_path.display(),
        env = env_path.display(),
    );
    std::fs::write(dir.path().join("hooks.yaml"), config).expect("write config");
    dir
}

async fn load_resolved(dir: &Path) -> Config {
    let mut config = load_config(&dir.join("hooks.yaml"))
        .await
        .expect("config should load");
    let output = ResolveEnvironment::new(ProcessEnvironment::new(), Reporter::default())
        .execute(&mut config)
        .expect("environment block present");
    assert_eq!(output.unresolved, vec!["UNSET"]);
    config
}

#[tokio::test]
async fn test_fire_group_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/orders"))
        .and(header("X-Source", "hookmock"))
        .and(header("X-Key", "from-dotenv"))
        .and(body_json(json!({
            "event": "order.created",
            "id": 7,
            "signature": "from-dotenv"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/refunds"))
        .and(body_json(json!({"id": 9})))
        .respond_with(ResponseTemplate::new(500).set_body_string("nope"))
        .expect(1)
        .mount(&server)
        .await;

    let dir = write_workspace(&server.uri());
    let config = load_resolved(dir.path()).await;

    let client = Arc::new(ReqwestHttpClient::new().expect("client"));
    let use_case = FireHooks::new(client, Reporter::default());

    let dispatches = use_case.fire_groups(&config, &["orders"]).await;
    assert_eq!(dispatches.issued(), ["created", "refunded"]);

    let outcomes = dispatches.join_all().await;
    let names: Vec<_> = outcomes.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["created", "orphan", "refunded"]);
    assert!(outcomes[0].is_success());
    assert!(matches!(outcomes[1].result, Err(FireError::ServerNotFound(_))));
    assert!(matches!(outcomes[2].result, Err(FireError::Request(_))));
}

#[tokio::test]
async fn test_unknown_hooks_send_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = write_workspace(&server.uri());
    let config = load_resolved(dir.path()).await;

    let client = Arc::new(ReqwestHttpClient::new().expect("client"));
    let outcomes = FireHooks::new(client, Reporter::default())
        .fire(&config, &["missing", "orphan"])
        .await
        .join_all()
        .await;

    assert!(matches!(outcomes[0].result, Err(FireError::HookNotFound(_))));
    assert!(matches!(outcomes[1].result, Err(FireError::ServerNotFound(_))));
}

#[tokio::test]
async fn test_server_without_url_does_not_block_other_hooks() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/refunds"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let dir = write_workspace(&server.uri());
    let config = load_resolved(dir.path()).await;

    let client = Arc::new(ReqwestHttpClient::new().expect("client"));
    let outcomes = FireHooks::new(client, Reporter::default())
        .fire(&config, &["stray", "refunded"])
        .await
        .join_all()
        .await;

    assert!(matches!(&outcomes[0].result, Err(FireError::ServerUrlMissing(s)) if s == "unfinished"));
    assert!(outcomes[1].is_success());
}
