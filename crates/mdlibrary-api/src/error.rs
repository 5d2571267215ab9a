//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use mdlibrary_core::error::{AppError, ErrorKind};

use crate::dto::response::{ErrorResponse, ResponseStatus};

/// Body text for any failure the client cannot act on.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred.";
/// Body text for rejected requests; thresholds and timings are not disclosed.
pub const RATE_LIMITED_MESSAGE: &str = "Request rate limit exceeded. Please wait before retrying.";

/// An [`AppError`] on its way out of a handler.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// HTTP status, envelope status, and client-facing message.
    fn parts(&self) -> (StatusCode, ResponseStatus, String) {
        match self.0.kind {
            ErrorKind::Validation => (
                StatusCode::BAD_REQUEST,
                ResponseStatus::MissingParameter,
                self.0.message.clone(),
            ),
            ErrorKind::NotFound => (
                StatusCode::NOT_FOUND,
                ResponseStatus::NoResults,
                self.0.message.clone(),
            ),
            ErrorKind::RateLimit => (
                StatusCode::TOO_MANY_REQUESTS,
                ResponseStatus::RateLimited,
                RATE_LIMITED_MESSAGE.to_string(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ResponseStatus::Failure,
                INTERNAL_ERROR_MESSAGE.to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, envelope, message) = self.parts();

        if status.is_server_error() {
            error!(kind = %self.0.kind, error = %self.0.chain(), "Unhandled error");
        }

        (status, Json(ErrorResponse::new(envelope, message))).into_response()
    }
}
