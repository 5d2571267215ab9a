//! Axum middleware stack.

pub mod host;
pub mod logging;
pub mod rate_limit;
pub mod security;
