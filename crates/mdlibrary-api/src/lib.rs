//! # mdlibrary-api
//!
//! HTTP API layer for MdLibrary built on Axum.
//!
//! Provides the `/api/v1/library` endpoints, per-scope rate limiting,
//! response security headers, host validation, request logging, extractors,
//! DTOs, and the mapping from [`AppError`](mdlibrary_core::AppError) to the
//! JSON envelope.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state};
pub use error::ApiError;
pub use state::AppState;
