//! Handler for paths no route matches.

use axum::Json;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use mdlibrary_core::types::RateScope;

use crate::dto::response::{ErrorResponse, ResponseStatus};
use crate::error::ApiError;
use crate::middleware::rate_limit::client_ip;
use crate::state::AppState;

/// Applies the generic rate limit, then answers 404.
pub async fn not_found(State(state): State<AppState>, request: Request) -> Response {
    let client = client_ip(&request);
    if let Err(e) = state
        .rate_limits
        .get(RateScope::Anon)
        .admit(&client, request.uri().path())
    {
        return ApiError::from(e).into_response();
    }

    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(
            ResponseStatus::NoResults,
            "Resource not found.",
        )),
    )
        .into_response()
}
