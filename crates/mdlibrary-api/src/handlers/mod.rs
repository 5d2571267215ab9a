//! HTTP request handlers.

pub mod fallback;
pub mod health;
pub mod library;
