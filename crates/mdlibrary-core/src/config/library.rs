//! Document library limits.

use serde::{Deserialize, Serialize};

/// Upload limits and version allocation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Maximum UTF-8 byte size of `file_contents`.
    pub max_upload_bytes: usize,
    /// How many times a create re-reads the latest version after losing a
    /// uniqueness race before giving up.
    pub allocation_retries: u32,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: 1_048_576,
            allocation_retries: 3,
        }
    }
}
