//! Route definitions for the MdLibrary HTTP API.
//!
//! All routes are mounted under `/api/v1` and answer with and without a
//! trailing slash. Every method is guarded by the rate limiter of its scope;
//! unmatched paths fall through to the generic scope.

use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{MethodRouter, delete, get, patch, post},
};

use mdlibrary_core::types::RateScope;

use crate::handlers;
use crate::middleware;
use crate::middleware::host::AllowedHosts;
use crate::middleware::rate_limit::limited;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.library.max_upload_bytes + state.config.server.body_headroom_bytes;
    let allowed_hosts = Arc::new(AllowedHosts::from_config(&state.config.server));

    Router::new()
        .merge(library_routes(&state))
        .merge(health_routes(&state))
        .fallback(handlers::fallback::not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(axum_middleware::from_fn_with_state(
            allowed_hosts,
            middleware::host::validate_host,
        ))
        .layer(axum_middleware::from_fn(
            middleware::security::security_headers,
        ))
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Registers `path` and `path/` for the same methods.
fn route_both(router: Router<AppState>, path: &str, methods: MethodRouter<AppState>) -> Router<AppState> {
    router
        .route(path, methods.clone())
        .route(&format!("{path}/"), methods)
}

/// Record store endpoints
fn library_routes(state: &AppState) -> Router<AppState> {
    let limits = &state.rate_limits;
    let mut router = Router::new();

    router = route_both(
        router,
        "/api/v1/library",
        limited(get(handlers::library::list_revisions), limits.get(RateScope::List)).merge(
            limited(post(handlers::library::create_revision), limits.get(RateScope::Create)),
        ),
    );
    router = route_both(
        router,
        "/api/v1/library/stats",
        limited(get(handlers::library::library_stats), limits.get(RateScope::Stats)),
    );
    router = route_both(
        router,
        "/api/v1/library/clear",
        limited(delete(handlers::library::clear_library), limits.get(RateScope::Clear)),
    );
    route_both(
        router,
        "/api/v1/library/{id}",
        limited(get(handlers::library::get_revision), limits.get(RateScope::Detail))
            .merge(limited(
                patch(handlers::library::update_revision),
                limits.get(RateScope::Update),
            ))
            .merge(limited(
                delete(handlers::library::delete_revision),
                limits.get(RateScope::Delete),
            )),
    )
}

/// Health endpoint
fn health_routes(state: &AppState) -> Router<AppState> {
    route_both(
        Router::new(),
        "/api/v1/health",
        limited(get(handlers::health::health), state.rate_limits.get(RateScope::Anon)),
    )
}
