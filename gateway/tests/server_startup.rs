//! Server Startup Tests
//!
//! Tests for state construction, configuration loading, and serving the
//! router over a real socket.

use std::fs;
use std::time::Duration;

use serial_test::serial;
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::time::timeout;

use practice_gateway::config::ConfigError;
use practice_gateway::state::StateError;
use practice_gateway::{BUILD_ID, ServerConfig, routes, state::AppState};

/// Helper function to create a minimal test configuration
fn create_minimal_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        tls: None,
        pinned_practice_id: None,
        default_practice_id: "shafer-clinic".to_string(),
        playht_api_key: None,
        playht_user_id: None,
        playht_tts_url: "http://127.0.0.1:9/unused".to_string(),
        cors_allowed_origins: None,
    }
}

/// State builds without any Play.ht credentials
#[test]
fn test_minimal_config_builds_state() {
    let state = AppState::new(create_minimal_config()).unwrap();
    assert!(!state.registry.is_pinned());
    assert_eq!(state.registry.default_practice().id, "shafer-clinic");
}

#[test]
fn test_unknown_pinned_practice_fails_state() {
    let mut config = create_minimal_config();
    config.pinned_practice_id = Some("closed-clinic".to_string());

    let err = AppState::new(config).unwrap_err();
    assert!(matches!(
        err,
        StateError::Config(ConfigError::UnknownPractice { .. })
    ));
}

#[test]
fn test_unknown_default_practice_fails_state() {
    let mut config = create_minimal_config();
    config.default_practice_id = "closed-clinic".to_string();

    assert!(AppState::new(config).is_err());
}

#[test]
#[serial]
fn test_yaml_pinned_deployment_boots() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.yaml");

    fs::write(
        &config_path,
        r#"
server:
  host: "127.0.0.1"
  port: 3020

practice:
  pinned_id: "arena-fysio-amsterdam"
"#,
    )
    .unwrap();

    let config = ServerConfig::from_file(&config_path).unwrap();
    assert_eq!(config.address(), "127.0.0.1:3020");

    let state = AppState::new(config).unwrap();
    assert!(state.registry.is_pinned());
    assert_eq!(
        state.registry.current(Some("shafer-clinic")).id,
        "arena-fysio-amsterdam"
    );
}

/// Serves the router on an ephemeral port and probes it over HTTP
#[tokio::test]
async fn test_server_serves_health_over_tcp() {
    let state = AppState::new(create_minimal_config()).unwrap();
    let app = routes::build_router(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = reqwest::Client::new();
    let response = timeout(
        Duration::from_secs(5),
        client.get(format!("http://{addr}/health")).send(),
    )
    .await
    .expect("health check timed out")
    .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.headers()["x-build-id"], BUILD_ID);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "OK");
    assert_eq!(body["buildId"], BUILD_ID);

    // Host header from the client is "127.0.0.1:<port>", so the default practice is served
    let practice: serde_json::Value = client
        .get(format!("http://{addr}/api/practice"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(practice["id"], "shafer-clinic");

    server.abort();
}
