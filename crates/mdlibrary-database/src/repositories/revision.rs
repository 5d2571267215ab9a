//! Revision repository implementation.

use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use mdlibrary_core::error::{AppError, ErrorKind};
use mdlibrary_core::result::AppResult;
use mdlibrary_entity::revision::{
    NewRevision, Revision, RevisionChanges, RevisionFilter, RevisionStats,
};

const COLUMNS: &str =
    "id, file_name, file_version, file_contents, deleted, created_at, updated_at";

/// Repository for revision CRUD and query operations.
#[derive(Debug, Clone)]
pub struct RevisionRepository {
    pool: SqlitePool,
}

impl RevisionRepository {
    /// Create a new revision repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a revision by ID, including soft-deleted ones.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Revision>> {
        sqlx::query_as::<_, Revision>(&format!("SELECT {COLUMNS} FROM revisions WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find revision", e))
    }

    /// List revisions ordered by file name, newest version first.
    pub async fn list(&self, filter: &RevisionFilter) -> AppResult<Vec<Revision>> {
        let mut query: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM revisions WHERE 1 = 1"));

        if let Some(name) = &filter.file_name {
            // instr() avoids LIKE, whose wildcards collide with '_' in names.
            query
                .push(" AND instr(lower(file_name), lower(")
                .push_bind(name.clone())
                .push(")) > 0");
        }
        if let Some(deleted) = filter.deleted {
            query.push(" AND deleted = ").push_bind(deleted);
        }
        query.push(" ORDER BY file_name ASC, file_version DESC");

        query
            .build_query_as::<Revision>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list revisions", e))
    }

    /// Highest version recorded for a file name, counting soft-deleted rows.
    pub async fn latest_version(&self, file_name: &str) -> AppResult<Option<i64>> {
        sqlx::query_scalar::<_, Option<i64>>(
            "SELECT MAX(file_version) FROM revisions WHERE file_name = ?",
        )
        .bind(file_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to read latest version", e)
        })
    }

    /// Insert a new revision.
    ///
    /// A duplicate `(file_name, file_version)` fails with [`ErrorKind::Conflict`].
    pub async fn insert(&self, data: &NewRevision) -> AppResult<Revision> {
        sqlx::query_as::<_, Revision>(&format!(
            "INSERT INTO revisions (file_name, file_version, file_contents, deleted, created_at, updated_at) \
             VALUES (?, ?, ?, FALSE, ?, ?) RETURNING {COLUMNS}"
        ))
        .bind(&data.file_name)
        .bind(data.file_version)
        .bind(&data.file_contents)
        .bind(data.created_at)
        .bind(data.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::with_source(
                    ErrorKind::Conflict,
                    format!(
                        "Version {} of '{}' already exists",
                        data.file_version, data.file_name
                    ),
                    e,
                )
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create revision", e),
        })
    }

    /// Apply a partial update. Returns `None` when the revision does not exist.
    pub async fn update(
        &self,
        id: i64,
        changes: &RevisionChanges,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Revision>> {
        sqlx::query_as::<_, Revision>(&format!(
            "UPDATE revisions SET file_contents = COALESCE(?, file_contents), \
             deleted = COALESCE(?, deleted), updated_at = ? \
             WHERE id = ? RETURNING {COLUMNS}"
        ))
        .bind(changes.file_contents.as_deref())
        .bind(changes.deleted)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update revision", e))
    }

    /// Mark a revision as deleted. Returns `false` when it does not exist.
    pub async fn soft_delete(&self, id: i64, now: DateTime<Utc>) -> AppResult<bool> {
        let result = sqlx::query("UPDATE revisions SET deleted = TRUE, updated_at = ? WHERE id = ?")
            .bind(now)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete revision", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Physically remove every revision. Returns the number of rows removed.
    pub async fn clear(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM revisions")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to clear revisions", e)
            })?;
        Ok(result.rows_affected())
    }

    /// Aggregate counts across the whole table.
    pub async fn stats(&self) -> AppResult<RevisionStats> {
        sqlx::query_as::<_, RevisionStats>(
            "SELECT \
                 COUNT(DISTINCT CASE WHEN deleted = FALSE THEN file_name END) AS active_files, \
                 COUNT(*) AS total_records, \
                 COALESCE(SUM(CASE WHEN deleted = TRUE THEN 1 ELSE 0 END), 0) AS deleted_records \
             FROM revisions",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to compute stats", e))
    }
}
