//! Integration tests for per-scope rate limiting.

mod helpers;

use std::time::Duration;

use axum::http::StatusCode;
use serde_json::json;

use mdlibrary_api::error::RATE_LIMITED_MESSAGE;

use helpers::TestApp;

fn create_body(i: usize) -> serde_json::Value {
    json!({"file_name": "limited.md", "file_contents": format!("body {i}")})
}

#[tokio::test]
async fn test_create_limit_rejects_eleventh_request() {
    let app = TestApp::new().await;

    for i in 0..10 {
        let response = app
            .request("POST", "/api/v1/library", Some(create_body(i)))
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "request {i}");
    }

    let response = app
        .request("POST", "/api/v1/library", Some(create_body(10)))
        .await;
    assert_eq!(response.status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.envelope(), "RATE_LIMITED");
    assert_eq!(response.error(), RATE_LIMITED_MESSAGE);

    assert_eq!(app.stats().await, (1, 10, 0));
}

#[tokio::test]
async fn test_scopes_are_independent() {
    let app = TestApp::with_config(|config| config.rate_limit.create = 2).await;

    app.create("a.md", "1").await;
    app.create("a.md", "2").await;
    let response = app
        .request("POST", "/api/v1/library", Some(create_body(0)))
        .await;
    assert_eq!(response.status, StatusCode::TOO_MANY_REQUESTS);

    let response = app.request("GET", "/api/v1/library", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["count"], 2);
}

#[tokio::test]
async fn test_clients_are_independent() {
    let app = TestApp::with_config(|config| config.rate_limit.create = 1).await;

    app.create("limited.md", "1").await;
    let response = app
        .request("POST", "/api/v1/library", Some(create_body(0)))
        .await;
    assert_eq!(response.status, StatusCode::TOO_MANY_REQUESTS);

    let response = app
        .request_from("10.0.0.7", "POST", "/api/v1/library", Some(create_body(1)))
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["result"]["file_version"], 2);
}

#[tokio::test]
async fn test_window_expiry_restores_access() {
    let app = TestApp::with_config(|config| {
        config.rate_limit.window_seconds = 1;
        config.rate_limit.stats = 2;
    })
    .await;

    for _ in 0..2 {
        let response = app.request("GET", "/api/v1/library/stats", None).await;
        assert_eq!(response.status, StatusCode::OK);
    }
    let response = app.request("GET", "/api/v1/library/stats", None).await;
    assert_eq!(response.status, StatusCode::TOO_MANY_REQUESTS);

    tokio::time::sleep(Duration::from_millis(1100)).await;

    let response = app.request("GET", "/api/v1/library/stats", None).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_clear_limit() {
    let app = TestApp::new().await;

    for _ in 0..5 {
        let response = app.request("DELETE", "/api/v1/library/clear", None).await;
        assert_eq!(response.status, StatusCode::NO_CONTENT);
    }
    app.create("kept.md", "still here").await;

    let response = app.request("DELETE", "/api/v1/library/clear/", None).await;
    assert_eq!(response.status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.envelope(), "RATE_LIMITED");
    assert_eq!(app.stats().await, (1, 1, 0));
}

#[tokio::test]
async fn test_rejected_update_does_not_mutate() {
    let app = TestApp::with_config(|config| config.rate_limit.update = 1).await;
    let created = app.create("a.md", "first").await;
    let path = format!("/api/v1/library/{}", created["id"]);

    let response = app
        .request("PATCH", &path, Some(json!({"file_contents": "second"})))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("PATCH", &path, Some(json!({"file_contents": "third"})))
        .await;
    assert_eq!(response.status, StatusCode::TOO_MANY_REQUESTS);

    let detail = app.request("GET", &path, None).await;
    assert_eq!(detail.body["result"]["file_contents"], "second");
}

#[tokio::test]
async fn test_rate_limit_checked_before_validation() {
    let app = TestApp::with_config(|config| config.rate_limit.create = 1).await;

    let response = app
        .request("POST", "/api/v1/library", Some(json!({})))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request("POST", "/api/v1/library", Some(json!({})))
        .await;
    assert_eq!(response.status, StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_unknown_paths_use_generic_limit() {
    let app = TestApp::with_config(|config| config.rate_limit.anon = 2).await;

    for _ in 0..2 {
        let response = app.request("GET", "/nowhere", None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }
    let response = app.request("GET", "/api/v1/health", None).await;
    assert_eq!(response.status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.envelope(), "RATE_LIMITED");

    // named scopes are unaffected
    let response = app.request("GET", "/api/v1/library", None).await;
    assert_eq!(response.status, StatusCode::OK);
}
