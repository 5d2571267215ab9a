//! Response DTOs.
//!
//! Every JSON body carries a `status` field alongside either a payload or an
//! `error` message.

use serde::{Deserialize, Serialize};

use mdlibrary_entity::revision::RevisionStats;

/// Envelope status reported in every response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    Success,
    Failure,
    MissingParameter,
    NoResults,
    RateLimited,
}

/// A single record.
#[derive(Debug, Clone, Serialize)]
pub struct ItemResponse<T: Serialize> {
    pub status: ResponseStatus,
    pub result: T,
}

impl<T: Serialize> ItemResponse<T> {
    /// Wraps a successful result.
    pub fn success(result: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            result,
        }
    }
}

/// A list of records with its length.
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub status: ResponseStatus,
    pub count: usize,
    pub results: Vec<T>,
}

impl<T: Serialize> ListResponse<T> {
    /// Wraps a successful list.
    pub fn success(results: Vec<T>) -> Self {
        Self {
            status: ResponseStatus::Success,
            count: results.len(),
            results,
        }
    }
}

/// Library-wide counts.
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub status: ResponseStatus,
    pub active_files: i64,
    pub total_records: i64,
    pub deleted_records: i64,
}

impl From<RevisionStats> for StatsResponse {
    fn from(stats: RevisionStats) -> Self {
        Self {
            status: ResponseStatus::Success,
            active_files: stats.active_files,
            total_records: stats.total_records,
            deleted_records: stats.deleted_records,
        }
    }
}

/// Error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: ResponseStatus,
    pub error: String,
}

impl ErrorResponse {
    /// Creates an error body.
    pub fn new(status: ResponseStatus, error: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: ResponseStatus,
    /// `connected` or `unavailable`.
    pub database: &'static str,
    pub version: &'static str,
}
