//! Revision entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One immutable-content row for a given file name and version number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Revision {
    /// Unique revision identifier, never reused.
    pub id: i64,
    /// The document name shared by all of its revisions.
    pub file_name: String,
    /// Sequential version number, starting at 1 per file name.
    pub file_version: i64,
    /// Raw markdown content.
    pub file_contents: String,
    /// Soft-delete flag.
    pub deleted: bool,
    /// When the revision was inserted.
    pub created_at: DateTime<Utc>,
    /// When the revision was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Data required to insert a new revision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRevision {
    /// The document name.
    pub file_name: String,
    /// The version number allocated for this row.
    pub file_version: i64,
    /// Raw markdown content.
    pub file_contents: String,
    /// Insertion time, used for both `created_at` and `updated_at`.
    pub created_at: DateTime<Utc>,
}
