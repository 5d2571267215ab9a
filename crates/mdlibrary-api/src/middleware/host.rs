//! `Host` header validation.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use mdlibrary_core::config::ServerConfig;

use crate::dto::response::{ErrorResponse, ResponseStatus};

const DEBUG_HOSTS: [&str; 3] = ["localhost", "127.0.0.1", "[::1]"];

/// Host patterns accepted in the `Host` header.
///
/// `*` accepts any host; a leading dot accepts the domain and every
/// subdomain; anything else must match exactly, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedHosts {
    patterns: Vec<String>,
}

impl AllowedHosts {
    /// Build from explicit patterns.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(|p| p.as_ref().trim().to_ascii_lowercase())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// Build from server settings, falling back to loopback names in debug
    /// mode when no hosts are configured.
    pub fn from_config(config: &ServerConfig) -> Self {
        if config.allowed_hosts.is_empty() && config.debug {
            Self::new(DEBUG_HOSTS)
        } else {
            Self::new(&config.allowed_hosts)
        }
    }

    /// Whether the raw `Host` header value is acceptable.
    pub fn allows(&self, host_header: &str) -> bool {
        let host = strip_port(host_header.trim()).to_ascii_lowercase();
        if host.is_empty() {
            return false;
        }
        self.patterns.iter().any(|pattern| matches_pattern(pattern, &host))
    }
}

fn matches_pattern(pattern: &str, host: &str) -> bool {
    if pattern == "*" {
        return true;
    }
    match pattern.strip_prefix('.') {
        Some(domain) => host == domain || host.ends_with(pattern),
        None => host == pattern,
    }
}

/// Drop a trailing `:port`, keeping bracketed IPv6 literals intact.
fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        return match host.find(']') {
            Some(end) => &host[..=end],
            None => host,
        };
    }
    match host.rsplit_once(':') {
        Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => name,
        _ => host,
    }
}

/// Rejects requests whose `Host` is not allowed with 400.
pub async fn validate_host(
    State(allowed): State<Arc<AllowedHosts>>,
    request: Request,
    next: Next,
) -> Response {
    let host = request
        .headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .or_else(|| request.uri().authority().map(|authority| authority.as_str()))
        .unwrap_or_default();

    if allowed.allows(host) {
        return next.run(request).await;
    }

    warn!(host, path = %request.uri().path(), "Invalid host header");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(
            ResponseStatus::Failure,
            "Invalid host header.",
        )),
    )
        .into_response()
}
