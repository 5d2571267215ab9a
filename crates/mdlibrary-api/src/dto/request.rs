//! Request DTOs.
//!
//! Body fields are held as raw JSON values so each field's type can be
//! checked in the same order as its content rules.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

use mdlibrary_core::error::AppError;
use mdlibrary_core::result::AppResult;
use mdlibrary_entity::revision::rules::{
    CHANGES_REQUIRED, CONTENTS_BLANK, DELETED_NOT_BOOLEAN, check_updated_contents,
};
use mdlibrary_entity::revision::{RevisionChanges, RevisionFilter};

/// Body of `POST /api/v1/library`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateRevisionRequest {
    pub file_name: Option<Value>,
    pub file_contents: Option<Value>,
}

impl CreateRevisionRequest {
    /// The file name. Anything but a JSON string counts as missing.
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_ref().and_then(Value::as_str)
    }

    /// The file contents. Anything but a JSON string counts as missing.
    pub fn file_contents(&self) -> Option<&str> {
        self.file_contents.as_ref().and_then(Value::as_str)
    }
}

/// Body of `PATCH /api/v1/library/{id}`.
///
/// A key that is present with a `null` value is kept as `Some(Value::Null)`
/// and fails the type check for its field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRevisionRequest {
    #[serde(default, deserialize_with = "present")]
    pub file_contents: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub deleted: Option<Value>,
}

impl UpdateRevisionRequest {
    /// Check the body and convert it into a partial update.
    ///
    /// Checks run in order: at least one field present, then `file_contents`,
    /// then `deleted`.
    pub fn into_changes(self, max_bytes: usize) -> AppResult<RevisionChanges> {
        if self.file_contents.is_none() && self.deleted.is_none() {
            warn!(field = "body", "Validation failure");
            return Err(AppError::validation(CHANGES_REQUIRED));
        }

        let file_contents = match self.file_contents {
            None => None,
            Some(Value::String(text)) => {
                check_updated_contents(&text, max_bytes)
                    .inspect_err(|_| warn!(field = "file_contents", "Validation failure"))?;
                Some(text)
            }
            Some(_) => {
                warn!(field = "file_contents", "Validation failure");
                return Err(AppError::validation(CONTENTS_BLANK));
            }
        };

        let deleted = match self.deleted {
            None => None,
            Some(Value::Bool(flag)) => Some(flag),
            Some(_) => {
                warn!(field = "deleted", "Validation failure");
                return Err(AppError::validation(DELETED_NOT_BOOLEAN));
            }
        };

        Ok(RevisionChanges {
            file_contents,
            deleted,
        })
    }
}

/// Deserializes a field that is present in the body, `null` included.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Query string of `GET /api/v1/library`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListRevisionsParams {
    pub file_name: Option<String>,
    pub deleted: Option<String>,
}

impl ListRevisionsParams {
    /// Build the repository filter.
    ///
    /// `deleted` is honoured only for `true`/`false` in any case; other values
    /// are ignored.
    pub fn into_filter(self) -> RevisionFilter {
        let deleted = self.deleted.and_then(|raw| {
            if raw.eq_ignore_ascii_case("true") {
                Some(true)
            } else if raw.eq_ignore_ascii_case("false") {
                Some(false)
            } else {
                None
            }
        });
        RevisionFilter {
            file_name: self.file_name,
            deleted,
        }
    }
}
