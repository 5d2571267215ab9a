//! Revision domain entities.

pub mod changes;
pub mod model;
pub mod rules;
pub mod stats;

pub use changes::{RevisionChanges, RevisionFilter};
pub use model::{NewRevision, Revision};
pub use stats::RevisionStats;
