//! Client-facing views of a revision.

use chrono::{DateTime, Utc};
use serde::Serialize;

use mdlibrary_entity::revision::Revision;

use crate::render::MarkdownRenderer;

/// Metadata-only view used by list, create, and update responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevisionSummary {
    pub id: i64,
    pub file_name: String,
    pub file_version: i64,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Revision> for RevisionSummary {
    fn from(revision: &Revision) -> Self {
        Self {
            id: revision.id,
            file_name: revision.file_name.clone(),
            file_version: revision.file_version,
            deleted: revision.deleted,
            created_at: revision.created_at,
            updated_at: revision.updated_at,
        }
    }
}

impl From<Revision> for RevisionSummary {
    fn from(revision: Revision) -> Self {
        Self::from(&revision)
    }
}

/// Full view for a single record: metadata, raw content, and rendered HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevisionDetail {
    #[serde(flatten)]
    pub summary: RevisionSummary,
    pub file_contents: String,
    pub rendered_html: String,
}

impl RevisionDetail {
    /// Build the detail view, rendering the stored markdown.
    pub fn render(revision: &Revision, renderer: &MarkdownRenderer) -> Self {
        Self {
            summary: RevisionSummary::from(revision),
            file_contents: revision.file_contents.clone(),
            rendered_html: renderer.render(&revision.file_contents),
        }
    }
}
