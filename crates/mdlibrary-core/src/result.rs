//! Convenience result type alias for MdLibrary.

use crate::error::AppError;

/// A specialized `Result` type for MdLibrary operations.
pub type AppResult<T> = Result<T, AppError>;
