//! Health check handler.

use axum::Json;
use axum::extract::State;
use tracing::warn;

use crate::dto::response::{HealthResponse, ResponseStatus};
use crate::state::AppState;

/// GET /api/v1/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match state.db.health_check().await {
        Ok(true) => "connected",
        Ok(false) => "unavailable",
        Err(e) => {
            warn!(error = %e.chain(), "Database health check failed");
            "unavailable"
        }
    };

    Json(HealthResponse {
        status: ResponseStatus::Success,
        database,
        version: env!("CARGO_PKG_VERSION"),
    })
}
