//! Response security headers.

use axum::extract::Request;
use axum::http::{HeaderMap, HeaderValue, header};
use axum::middleware::Next;
use axum::response::Response;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rand::Rng;

/// The per-request CSP nonce, available to handlers as a request extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CspNonce(pub String);

impl CspNonce {
    /// A fresh random nonce.
    pub fn generate() -> Self {
        let mut bytes = [0u8; 16];
        rand::thread_rng().fill(&mut bytes);
        Self(STANDARD.encode(bytes))
    }
}

/// The `Content-Security-Policy` value for `nonce`.
pub fn content_security_policy(nonce: &CspNonce) -> String {
    format!(
        "default-src 'self'; \
         script-src 'self' 'nonce-{}' ajax.googleapis.com; \
         style-src 'self' ajax.googleapis.com cdn.jsdelivr.net fonts.googleapis.com; \
         font-src fonts.gstatic.com cdn.jsdelivr.net; \
         img-src 'self' https: data:; \
         frame-ancestors 'none'",
        nonce.0
    )
}

/// Adds CSP and hardening headers to every response.
pub async fn security_headers(mut request: Request, next: Next) -> Response {
    let nonce = CspNonce::generate();
    let policy = content_security_policy(&nonce);
    request.extensions_mut().insert(nonce);

    let mut response = next.run(request).await;
    apply_headers(response.headers_mut(), &policy);
    response
}

fn apply_headers(headers: &mut HeaderMap, policy: &str) {
    if let Ok(value) = HeaderValue::from_str(policy) {
        headers.insert(header::CONTENT_SECURITY_POLICY, value);
    }
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
}
