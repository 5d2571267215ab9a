//! JSON body extractor with envelope-shaped rejections.

use axum::Json;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use tracing::warn;

use mdlibrary_core::error::AppError;

use crate::error::ApiError;

/// Like [`axum::Json`], but every rejection becomes a 400 validation error.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                warn!(field = "body", reason = %rejection.body_text(), "Validation failure");
                let message = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    "Request body exceeds the maximum allowed size."
                } else {
                    "Request body must be valid JSON."
                };
                Err(AppError::validation(message).into())
            }
        }
    }
}
