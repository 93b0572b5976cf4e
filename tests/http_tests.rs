//! End-to-end tests against a real listener.
//!
//! Each test binds its own server on an ephemeral port, so tests run in
//! parallel without sharing hit counts.
//!
//! Run with: cargo test --test http_tests
use std::net::SocketAddr;
use std::time::Duration;

use dockdemo::config::HttpServerConfig;
use dockdemo::http::start_server;
use dockdemo::{create_router, AppConfig, AppState};
use reqwest::StatusCode;
use serde_json::{json, Value};

/// Start the application on 127.0.0.1:0 and return its base URL.
async fn spawn_app(config: AppConfig) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr: SocketAddr = listener.local_addr().unwrap();
    let app = create_router(AppState::new(config));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn welcome_endpoint() {
    let base = spawn_app(AppConfig::default()).await;
    let response = reqwest::get(format!("{}/", base)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Welcome to the Docker Demo");
    assert_eq!(body["status"], "success");
}

#[tokio::test]
async fn welcome_message_is_configurable() {
    let config = AppConfig::from_toml("[ui]\nwelcome_message = \"Ahoy\"\n").unwrap();
    let base = spawn_app(config).await;

    let body: Value = reqwest::get(format!("{}/", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["message"], "Ahoy");
}

#[tokio::test]
async fn health_endpoint() {
    let base = spawn_app(AppConfig::default()).await;
    let response = reqwest::get(format!("{}/health", base)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["cache-control"].to_str().unwrap(),
        "no-store"
    );
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "status": "healthy" }));
}

#[tokio::test]
async fn unknown_path_and_wrong_method() {
    let base = spawn_app(AppConfig::default()).await;
    let client = reqwest::Client::new();

    let response = client.get(format!("{}/foo", base)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client.post(format!("{}/", base)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn concurrent_requests_do_not_interfere() {
    let base = spawn_app(AppConfig::default()).await;
    let client = reqwest::Client::new();

    let requests = (0..50).map(|i| {
        let client = client.clone();
        let path = if i % 2 == 0 { "/" } else { "/health" };
        let url = format!("{}{}", base, path);
        tokio::spawn(async move {
            let response = client.get(url).send().await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let body: Value = response.json().await.unwrap();
            (path, body)
        })
    });

    for request in requests.collect::<Vec<_>>() {
        let (path, body) = request.await.unwrap();
        if path == "/" {
            assert_eq!(
                body,
                json!({ "message": "Welcome to the Docker Demo", "status": "success" })
            );
        } else {
            assert_eq!(body, json!({ "status": "healthy" }));
        }
    }

    let hits: Value = client
        .get(format!("{}/hits", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(hits, json!({ "hits": { "/": 25, "/health": 25 }, "total_hits": 50 }));
}

/// Reserve a free port by binding and immediately releasing it.
fn free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

#[tokio::test]
async fn start_server_serves_health() {
    let http = HttpServerConfig {
        host: "127.0.0.1".to_string(),
        port: free_port(),
        shutdown_timeout_seconds: 1,
    };
    let url = format!("http://{}:{}/health", http.host, http.port);
    let app = create_router(AppState::new(AppConfig::default()));

    let server = tokio::spawn(async move { start_server(app, &http).await });

    // Wait for the listener to come up
    let client = reqwest::Client::new();
    let mut response = None;
    for _ in 0..50 {
        if let Ok(r) = client.get(&url).send().await {
            response = Some(r);
            break;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    let response = response.expect("server did not start within 2.5 seconds");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "status": "healthy" }));

    assert!(!server.is_finished());
    server.abort();
}
