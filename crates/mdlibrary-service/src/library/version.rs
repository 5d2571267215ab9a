//! Version number allocation for new revisions.

use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use mdlibrary_core::error::{AppError, ErrorKind};
use mdlibrary_core::result::AppResult;
use mdlibrary_database::repositories::RevisionRepository;
use mdlibrary_entity::revision::{NewRevision, Revision};

/// Assigns the next `file_version` for a file name and persists the revision.
///
/// Allocations for the same name are serialized by an in-process lock keyed
/// by name; different names proceed in parallel. The unique index on
/// `(file_name, file_version)` catches writers outside this process, and a
/// losing insert re-reads the latest version and tries again.
#[derive(Debug)]
pub struct VersionAllocator {
    repo: RevisionRepository,
    locks: DashMap<String, Arc<Mutex<()>>>,
    retries: u32,
}

impl VersionAllocator {
    /// Create an allocator that retries a lost race up to `retries` times.
    pub fn new(repo: RevisionRepository, retries: u32) -> Self {
        Self {
            repo,
            locks: DashMap::new(),
            retries,
        }
    }

    /// Insert `file_contents` as the next version of `file_name`.
    pub async fn allocate(&self, file_name: &str, file_contents: &str) -> AppResult<Revision> {
        let lock = self.lock_for(file_name);
        let result = {
            let _guard = lock.lock().await;
            self.insert_next(file_name, file_contents).await
        };
        drop(lock);
        self.locks
            .remove_if(file_name, |_, held| Arc::strong_count(held) == 1);
        result
    }

    /// Number of names with an outstanding lock entry.
    pub fn pending_names(&self) -> usize {
        self.locks.len()
    }

    fn lock_for(&self, file_name: &str) -> Arc<Mutex<()>> {
        self.locks
            .entry(file_name.to_string())
            .or_default()
            .value()
            .clone()
    }

    async fn insert_next(&self, file_name: &str, file_contents: &str) -> AppResult<Revision> {
        let attempts = self.retries.saturating_add(1);
        let mut last_conflict = None;

        for attempt in 1..=attempts {
            let next = self
                .repo
                .latest_version(file_name)
                .await?
                .map_or(1, |latest| latest + 1);

            let data = NewRevision {
                file_name: file_name.to_string(),
                file_version: next,
                file_contents: file_contents.to_string(),
                created_at: Utc::now(),
            };

            match self.repo.insert(&data).await {
                Ok(revision) => {
                    debug!(file_name, file_version = next, attempt, "Version allocated");
                    return Ok(revision);
                }
                Err(e) if e.is(ErrorKind::Conflict) => {
                    warn!(file_name, file_version = next, attempt, "Version already taken, retrying");
                    last_conflict = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        let message = format!("Could not allocate a version for '{file_name}' after {attempts} attempts");
        Err(match last_conflict {
            Some(conflict) => AppError::with_source(ErrorKind::Internal, message, conflict),
            None => AppError::internal(message),
        })
    }
}
