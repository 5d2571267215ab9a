//! Query string extractor with envelope-shaped rejections.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use tracing::warn;

use mdlibrary_core::error::AppError;

use crate::error::ApiError;

/// Like [`axum::extract::Query`], but a query string that does not fit `T`
/// becomes a 400 validation error.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => {
                warn!(field = "query", reason = %rejection.body_text(), "Validation failure");
                Err(AppError::validation("Query parameters are malformed.").into())
            }
        }
    }
}
