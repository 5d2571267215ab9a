//! HTTP server configuration.

use serde::{Deserialize, Serialize};

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Relaxes the host check for local development.
    pub debug: bool,
    /// Host names accepted in the `Host` header. `"*"` accepts any host and a
    /// leading dot (`".example.com"`) accepts the domain and its subdomains.
    pub allowed_hosts: Vec<String>,
    /// Extra bytes allowed on top of `library.max_upload_bytes` for the JSON
    /// envelope before a request body is rejected.
    pub body_headroom_bytes: usize,
    /// Graceful shutdown timeout in seconds.
    pub shutdown_grace_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            debug: false,
            allowed_hosts: vec!["localhost".to_string(), "127.0.0.1".to_string()],
            body_headroom_bytes: 100_000,
            shutdown_grace_seconds: 30,
        }
    }
}

impl ServerConfig {
    /// The `host:port` pair to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
