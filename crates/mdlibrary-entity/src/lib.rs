//! # mdlibrary-entity
//!
//! Domain entity models for MdLibrary. Every struct in this crate represents
//! a database table row or a domain value object. Row types additionally
//! derive `sqlx::FromRow`.

pub mod revision;

pub use revision::{NewRevision, Revision, RevisionChanges, RevisionFilter, RevisionStats};
