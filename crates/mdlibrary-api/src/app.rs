//! Application builder: wires router, middleware, and state into an Axum app.

use std::sync::Arc;

use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use mdlibrary_core::config::AppConfig;
use mdlibrary_database::{DatabasePool, RevisionRepository};
use mdlibrary_service::LibraryService;

use crate::middleware::rate_limit::RateLimitRegistry;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the shared state from configuration and a migrated pool.
pub fn build_state(config: AppConfig, db: DatabasePool) -> AppState {
    let repo = RevisionRepository::new(db.pool().clone());
    let library = Arc::new(LibraryService::new(repo, config.library.clone()));
    let rate_limits = Arc::new(RateLimitRegistry::from_config(&config.rate_limit));

    AppState {
        config: Arc::new(config),
        db,
        library,
        rate_limits,
    }
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
