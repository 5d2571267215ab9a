//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::net::{IpAddr, SocketAddr};

use axum::Router;
use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{HeaderMap, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use mdlibrary_api::{AppState, build_app, build_state};
use mdlibrary_core::config::AppConfig;
use mdlibrary_database::DatabasePool;
use mdlibrary_database::migration::run_migrations;

/// Peer address used when a test does not pick one.
pub const DEFAULT_CLIENT: &str = "127.0.0.1";

/// Test application context
#[derive(Clone)]
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for direct service access
    pub state: AppState,
}

impl TestApp {
    /// Create a test application with default settings and an empty
    /// in-memory database.
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Create a test application after adjusting the default configuration.
    pub async fn with_config(adjust: impl FnOnce(&mut AppConfig)) -> Self {
        let mut config = AppConfig::default();
        config.database.url = "sqlite::memory:".to_string();
        adjust(&mut config);

        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");
        run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        let state = build_state(config, db);
        let router = build_app(state.clone());

        Self { router, state }
    }

    /// Make a JSON request from the default client
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        self.request_from(DEFAULT_CLIENT, method, path, body).await
    }

    /// Make a JSON request from the given client IP
    pub async fn request_from(
        &self,
        client: &str,
        method: &str,
        path: &str,
        body: Option<Value>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::HOST, "localhost")
            .header(header::CONTENT_TYPE, "application/json")
            .extension(connect_info(client))
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a prepared request
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 4 * 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Create a revision and return its `result` object
    pub async fn create(&self, file_name: &str, file_contents: &str) -> Value {
        let response = self
            .request(
                "POST",
                "/api/v1/library",
                Some(serde_json::json!({
                    "file_name": file_name,
                    "file_contents": file_contents,
                })),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Create failed: {:?}",
            response.body
        );
        response.body["result"].clone()
    }

    /// Fetch library stats as `(active_files, total_records, deleted_records)`
    pub async fn stats(&self) -> (i64, i64, i64) {
        let response = self.request("GET", "/api/v1/library/stats", None).await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        (
            response.body["active_files"].as_i64().expect("active_files"),
            response.body["total_records"].as_i64().expect("total_records"),
            response.body["deleted_records"].as_i64().expect("deleted_records"),
        )
    }
}

/// The `ConnectInfo` extension the server attaches for a peer.
pub fn connect_info(client: &str) -> ConnectInfo<SocketAddr> {
    let ip: IpAddr = client.parse().expect("Invalid client IP");
    ConnectInfo(SocketAddr::new(ip, 40_000))
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body, `Null` when empty or not JSON
    pub body: Value,
}

impl TestResponse {
    /// The envelope `status` field
    pub fn envelope(&self) -> &str {
        self.body["status"].as_str().unwrap_or_default()
    }

    /// The envelope `error` field
    pub fn error(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }

    /// A response header as a string
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
