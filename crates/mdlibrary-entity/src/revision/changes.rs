//! Mutation and query inputs for revisions.

use serde::{Deserialize, Serialize};

use mdlibrary_core::error::AppError;
use mdlibrary_core::result::AppResult;

use super::rules::{CHANGES_REQUIRED, check_updated_contents};

/// A partial update to an existing revision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionChanges {
    /// Replacement markdown content.
    pub file_contents: Option<String>,
    /// New soft-delete flag.
    pub deleted: Option<bool>,
}

impl RevisionChanges {
    /// Whether the update carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.file_contents.is_none() && self.deleted.is_none()
    }

    /// Check that the update can be applied as-is.
    pub fn validate(&self, max_bytes: usize) -> AppResult<()> {
        if self.is_empty() {
            return Err(AppError::validation(CHANGES_REQUIRED));
        }
        if let Some(text) = &self.file_contents {
            check_updated_contents(text, max_bytes)?;
        }
        Ok(())
    }
}

/// Filters for listing revisions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionFilter {
    /// Case-insensitive substring of the file name.
    pub file_name: Option<String>,
    /// Only revisions with this soft-delete flag.
    pub deleted: Option<bool>,
}

impl RevisionFilter {
    /// Check that the filter is usable.
    pub fn validate(&self) -> AppResult<()> {
        match &self.file_name {
            Some(name) if name.trim().is_empty() => {
                Err(AppError::validation("file_name must not be blank."))
            }
            _ => Ok(()),
        }
    }
}
