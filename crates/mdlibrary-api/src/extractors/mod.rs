//! Custom Axum extractors.

pub mod json;
pub mod path;
pub mod query;

pub use json::ValidJson;
pub use path::parse_revision_id;
pub use query::ValidQuery;
