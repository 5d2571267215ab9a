//! Integration tests for host validation, security headers and rendered
//! output sanitization.

mod helpers;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};

use helpers::{TestApp, TestResponse};

async fn get_with_host(app: &TestApp, host: &str, path: &str) -> TestResponse {
    let req = Request::builder()
        .method("GET")
        .uri(path)
        .header(header::HOST, host)
        .extension(helpers::connect_info(helpers::DEFAULT_CLIENT))
        .body(Body::empty())
        .unwrap();
    app.send(req).await
}

fn assert_security_headers(response: &TestResponse) {
    let policy = response
        .header("content-security-policy")
        .expect("missing CSP header");
    assert!(policy.starts_with("default-src 'self'; script-src 'self' 'nonce-"));
    assert!(policy.contains("frame-ancestors 'none'"));
    assert_eq!(response.header("x-content-type-options"), Some("nosniff"));
    assert_eq!(response.header("x-frame-options"), Some("DENY"));
    assert_eq!(
        response.header("referrer-policy"),
        Some("strict-origin-when-cross-origin")
    );
}

#[tokio::test]
async fn test_security_headers_on_every_response() {
    let app = TestApp::new().await;

    let ok = app.request("GET", "/api/v1/library", None).await;
    assert_eq!(ok.status, StatusCode::OK);
    assert_security_headers(&ok);

    let missing = app.request("GET", "/api/v1/library/12345", None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_security_headers(&missing);

    let unknown = app.request("GET", "/elsewhere", None).await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
    assert_security_headers(&unknown);
}

#[tokio::test]
async fn test_csp_nonce_changes_per_request() {
    let app = TestApp::new().await;

    let first = app.request("GET", "/api/v1/health", None).await;
    let second = app.request("GET", "/api/v1/health", None).await;

    assert_ne!(
        first.header("content-security-policy"),
        second.header("content-security-policy")
    );
}

#[tokio::test]
async fn test_unknown_host_rejected() {
    let app = TestApp::new().await;

    let response = get_with_host(&app, "evil.example", "/api/v1/library").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.envelope(), "FAILURE");
    assert_eq!(response.error(), "Invalid host header.");
    assert_security_headers(&response);
}

#[tokio::test]
async fn test_host_with_port_allowed() {
    let app = TestApp::new().await;

    let response = get_with_host(&app, "127.0.0.1:8000", "/api/v1/library").await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_configured_hosts() {
    let app = TestApp::with_config(|config| {
        config.server.allowed_hosts = vec![".docs.test".to_string()];
    })
    .await;

    let response = get_with_host(&app, "api.docs.test", "/api/v1/health").await;
    assert_eq!(response.status, StatusCode::OK);
    let response = get_with_host(&app, "localhost", "/api/v1/health").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_wildcard_host() {
    let app = TestApp::with_config(|config| {
        config.server.allowed_hosts = vec!["*".to_string()];
    })
    .await;

    let response = get_with_host(&app, "anything.example:9000", "/api/v1/health").await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_debug_mode_allows_loopback_when_unconfigured() {
    let app = TestApp::with_config(|config| {
        config.server.debug = true;
        config.server.allowed_hosts = Vec::new();
    })
    .await;

    for host in ["localhost:8000", "127.0.0.1", "[::1]:8000"] {
        let response = get_with_host(&app, host, "/api/v1/health").await;
        assert_eq!(response.status, StatusCode::OK, "{host}");
    }
    let response = get_with_host(&app, "example.com", "/api/v1/health").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_stored_markup_is_sanitized() {
    let app = TestApp::new().await;
    let created = app
        .create(
            "payload.md",
            "<img src=x onerror=alert(1)>\n\n\
             [click](javascript:alert(1) \"t\")\n\n\
             ![pic](data:image/png;base64,AAAA)\n\n\
             <!-- hidden -->\n\n\
             ```html\n<b>literal</b>\n```\n",
        )
        .await;

    let response = app
        .request("GET", &format!("/api/v1/library/{}", created["id"]), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let html = response.body["result"]["rendered_html"].as_str().unwrap();

    assert!(!html.contains("<img src=\"x\""), "{html}");
    assert!(!html.contains("onerror=\""), "{html}");
    assert!(!html.contains("href=\"javascript"), "{html}");
    assert!(!html.contains("<!--"), "{html}");
    assert!(!html.contains("data:image"), "{html}");
    assert!(html.contains("alt=\"pic\""), "{html}");
    assert!(html.contains("&lt;b&gt;literal&lt;/b&gt;"), "{html}");
    assert!(html.contains("class=\"language-html\""), "{html}");
}
