//! Record store use cases: list, create, detail, update, delete, clear, stats.

use chrono::Utc;
use tracing::{info, warn};

use mdlibrary_core::config::LibraryConfig;
use mdlibrary_core::error::AppError;
use mdlibrary_core::result::AppResult;
use mdlibrary_database::repositories::RevisionRepository;
use mdlibrary_entity::revision::rules::{check_file_name, check_new_contents};
use mdlibrary_entity::revision::{RevisionChanges, RevisionFilter, RevisionStats};

use super::projection::{RevisionDetail, RevisionSummary};
use super::version::VersionAllocator;
use crate::render::MarkdownRenderer;

const RECORD_NOT_FOUND: &str = "Record not found.";

/// Orchestrates validation, version allocation, and rendering for revisions.
#[derive(Debug)]
pub struct LibraryService {
    /// Revision repository.
    repo: RevisionRepository,
    /// Version allocator for creates.
    allocator: VersionAllocator,
    /// Markdown renderer for detail views.
    renderer: MarkdownRenderer,
    /// Upload limits.
    config: LibraryConfig,
}

impl LibraryService {
    /// Creates a new library service.
    pub fn new(repo: RevisionRepository, config: LibraryConfig) -> Self {
        Self {
            allocator: VersionAllocator::new(repo.clone(), config.allocation_retries),
            renderer: MarkdownRenderer::new(),
            repo,
            config,
        }
    }

    /// Lists revision metadata matching the filter.
    pub async fn list(&self, filter: &RevisionFilter) -> AppResult<Vec<RevisionSummary>> {
        filter
            .validate()
            .inspect_err(|_| warn!(field = "file_name", "Validation failure"))?;

        let revisions = self.repo.list(filter).await?;
        Ok(revisions.iter().map(RevisionSummary::from).collect())
    }

    /// Stores new content under the next version of `file_name`.
    pub async fn create(
        &self,
        file_name: Option<&str>,
        file_contents: Option<&str>,
    ) -> AppResult<RevisionSummary> {
        let file_name = check_file_name(file_name)
            .inspect_err(|_| warn!(field = "file_name", "Validation failure"))?;
        let file_contents = check_new_contents(file_contents, self.config.max_upload_bytes)
            .inspect_err(|_| warn!(field = "file_contents", "Validation failure"))?;

        let revision = self.allocator.allocate(file_name, file_contents).await?;

        info!(
            id = revision.id,
            file_name = %revision.file_name,
            file_version = revision.file_version,
            "File uploaded"
        );

        Ok(RevisionSummary::from(revision))
    }

    /// Fetches one revision, deleted or not, with rendered HTML.
    pub async fn get_detail(&self, id: i64) -> AppResult<RevisionDetail> {
        let revision = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(RECORD_NOT_FOUND))?;

        Ok(RevisionDetail::render(&revision, &self.renderer))
    }

    /// Fails with not-found unless a revision with `id` exists.
    pub async fn ensure_exists(&self, id: i64) -> AppResult<()> {
        match self.repo.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::not_found(RECORD_NOT_FOUND)),
        }
    }

    /// Applies a partial update to an existing revision.
    ///
    /// Existence is checked before the changes are validated, so an unknown
    /// id is reported as missing even when the body is also invalid.
    pub async fn update(&self, id: i64, changes: &RevisionChanges) -> AppResult<RevisionSummary> {
        self.ensure_exists(id).await?;

        changes
            .validate(self.config.max_upload_bytes)
            .inspect_err(|_| {
                let field = if changes.is_empty() { "body" } else { "file_contents" };
                warn!(field, "Validation failure");
            })?;

        let revision = self
            .repo
            .update(id, changes, Utc::now())
            .await?
            .ok_or_else(|| AppError::not_found(RECORD_NOT_FOUND))?;

        info!(
            id,
            file_name = %revision.file_name,
            deleted = revision.deleted,
            "File updated"
        );

        Ok(RevisionSummary::from(revision))
    }

    /// Marks a revision as deleted. Its version number stays taken.
    pub async fn soft_delete(&self, id: i64) -> AppResult<()> {
        if !self.repo.soft_delete(id, Utc::now()).await? {
            return Err(AppError::not_found(RECORD_NOT_FOUND));
        }
        info!(id, "File deleted");
        Ok(())
    }

    /// Physically removes every revision.
    pub async fn clear(&self) -> AppResult<u64> {
        let count = self.repo.clear().await?;
        info!(count, "Database cleared");
        Ok(count)
    }

    /// Aggregate counts across the library.
    pub async fn stats(&self) -> AppResult<RevisionStats> {
        self.repo.stats().await
    }
}
