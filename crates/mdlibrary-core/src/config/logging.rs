//! Logging configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Logging and tracing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: `"trace"`, `"debug"`, `"info"`, `"warn"`, `"error"`.
    /// Any `EnvFilter` directive is accepted.
    pub level: String,
    /// Log format: `"json"` or `"pretty"`.
    pub format: String,
    /// Directory for `mdlibrary.log`. Empty means stdout.
    pub directory: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            directory: String::new(),
        }
    }
}

impl LoggingConfig {
    /// Path of the log file, when file logging is enabled.
    pub fn file_path(&self) -> Option<PathBuf> {
        let dir = self.directory.trim();
        (!dir.is_empty()).then(|| PathBuf::from(dir).join("mdlibrary.log"))
    }
}
