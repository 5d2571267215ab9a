//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use mdlibrary_core::config::AppConfig;
use mdlibrary_database::DatabasePool;
use mdlibrary_service::LibraryService;

use crate::middleware::rate_limit::RateLimitRegistry;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// SQLite connection pool
    pub db: DatabasePool,
    /// Record store use cases
    pub library: Arc<LibraryService>,
    /// One rate limiter per scope
    pub rate_limits: Arc<RateLimitRegistry>,
}
