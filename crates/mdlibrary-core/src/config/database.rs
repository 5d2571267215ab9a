//! Database configuration.

use serde::{Deserialize, Serialize};

/// SQLite connection pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite connection URL, e.g. `sqlite://data/mdlibrary.db` or `sqlite::memory:`.
    pub url: String,
    /// Maximum number of connections in the pool (ignored for in-memory databases).
    pub max_connections: u32,
    /// Pool acquire timeout in seconds.
    pub connect_timeout_seconds: u64,
    /// How long a connection waits on a locked database before failing.
    pub busy_timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://data/mdlibrary.db".to_string(),
            max_connections: 5,
            connect_timeout_seconds: 10,
            busy_timeout_seconds: 5,
        }
    }
}
