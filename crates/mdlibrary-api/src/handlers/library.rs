//! Library record handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

use mdlibrary_service::{RevisionDetail, RevisionSummary};

use crate::dto::request::{CreateRevisionRequest, ListRevisionsParams, UpdateRevisionRequest};
use crate::dto::response::{ItemResponse, ListResponse, StatsResponse};
use crate::error::ApiError;
use crate::extractors::{ValidJson, ValidQuery, parse_revision_id};
use crate::state::AppState;

/// GET /api/v1/library
pub async fn list_revisions(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<ListRevisionsParams>,
) -> Result<Json<ListResponse<RevisionSummary>>, ApiError> {
    let filter = params.into_filter();
    let results = state.library.list(&filter).await?;
    Ok(Json(ListResponse::success(results)))
}

/// POST /api/v1/library
pub async fn create_revision(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<CreateRevisionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let summary = state
        .library
        .create(body.file_name(), body.file_contents())
        .await?;
    let location = format!("/api/v1/library/{}/", summary.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ItemResponse::success(summary)),
    ))
}

/// GET /api/v1/library/{id}
pub async fn get_revision(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ItemResponse<RevisionDetail>>, ApiError> {
    let id = parse_revision_id(&id)?;
    let detail = state.library.get_detail(id).await?;
    Ok(Json(ItemResponse::success(detail)))
}

/// PATCH /api/v1/library/{id}
///
/// An unknown id is reported before anything in the body is checked.
pub async fn update_revision(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<ValidJson<UpdateRevisionRequest>, ApiError>,
) -> Result<Json<ItemResponse<RevisionSummary>>, ApiError> {
    let id = parse_revision_id(&id)?;
    state.library.ensure_exists(id).await?;

    let ValidJson(body) = body?;
    let changes = body.into_changes(state.config.library.max_upload_bytes)?;
    let summary = state.library.update(id, &changes).await?;
    Ok(Json(ItemResponse::success(summary)))
}

/// DELETE /api/v1/library/{id}
pub async fn delete_revision(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_revision_id(&id)?;
    state.library.soft_delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/library/clear
pub async fn clear_library(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.library.clear().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/library/stats
pub async fn library_stats(
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, ApiError> {
    let stats = state.library.stats().await?;
    Ok(Json(StatsResponse::from(stats)))
}
