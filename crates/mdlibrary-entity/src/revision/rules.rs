//! Field rules for revisions.
//!
//! The messages here are returned to clients verbatim as the `error` field
//! of a 400 response.

use mdlibrary_core::error::AppError;
use mdlibrary_core::result::AppResult;

/// Maximum length of a file name, in characters.
pub const MAX_FILE_NAME_LEN: usize = 255;

const NAME_REQUIRED: &str = "file_name is required and must not be blank.";
const NAME_INVALID: &str = "file_name must be 255 characters or fewer and contain only \
                            alphanumeric characters, hyphens, underscores, or dots.";
const CONTENTS_REQUIRED: &str = "file_contents is required and must not be blank.";

/// An update carried neither `file_contents` nor `deleted`.
pub const CHANGES_REQUIRED: &str = "At least one of file_contents or deleted is required.";
/// An update's `file_contents` was blank or not a string.
pub const CONTENTS_BLANK: &str = "file_contents must not be blank.";
/// An update's `deleted` was not a JSON boolean.
pub const DELETED_NOT_BOOLEAN: &str = "deleted must be a boolean.";

/// Whether `c` may appear in a file name.
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}

/// Whether `name` matches `^[A-Za-z0-9\-_.]+$` and fits the length limit.
pub fn is_valid_file_name(name: &str) -> bool {
    !name.is_empty() && name.chars().count() <= MAX_FILE_NAME_LEN && name.chars().all(is_name_char)
}

/// Validate the `file_name` of a create request.
pub fn check_file_name(name: Option<&str>) -> AppResult<&str> {
    match name {
        None | Some("") => Err(AppError::validation(NAME_REQUIRED)),
        Some(name) if !is_valid_file_name(name) => Err(AppError::validation(NAME_INVALID)),
        Some(name) => Ok(name),
    }
}

/// Validate the `file_contents` of a create request.
pub fn check_new_contents(contents: Option<&str>, max_bytes: usize) -> AppResult<&str> {
    match contents {
        Some(text) if !text.trim().is_empty() => {
            check_content_size(text, max_bytes)?;
            Ok(text)
        }
        _ => Err(AppError::validation(CONTENTS_REQUIRED)),
    }
}

/// Validate replacement `file_contents` on an update.
pub fn check_updated_contents(text: &str, max_bytes: usize) -> AppResult<()> {
    if text.trim().is_empty() {
        return Err(AppError::validation(CONTENTS_BLANK));
    }
    check_content_size(text, max_bytes)
}

/// Reject content whose UTF-8 encoding exceeds `max_bytes`.
pub fn check_content_size(text: &str, max_bytes: usize) -> AppResult<()> {
    if text.len() > max_bytes {
        return Err(AppError::validation(format!(
            "file_contents exceeds the maximum allowed size of {max_bytes} bytes."
        )));
    }
    Ok(())
}
