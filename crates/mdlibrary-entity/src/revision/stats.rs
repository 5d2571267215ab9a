//! Aggregate counts over the revision table.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Library-wide revision counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct RevisionStats {
    /// Distinct file names with at least one non-deleted revision.
    pub active_files: i64,
    /// All revisions, deleted or not.
    pub total_records: i64,
    /// Soft-deleted revisions.
    pub deleted_records: i64,
}
