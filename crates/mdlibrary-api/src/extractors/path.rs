//! Typed path parameter helpers.

use mdlibrary_core::error::AppError;

/// Parses a revision id from a path segment.
///
/// A segment that is not an integer cannot name a record, so it is reported
/// as missing rather than malformed.
pub fn parse_revision_id(s: &str) -> Result<i64, AppError> {
    s.parse::<i64>()
        .map_err(|_| AppError::not_found("Record not found."))
}
