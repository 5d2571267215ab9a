//! # mdlibrary-core
//!
//! Core crate for MdLibrary. Contains configuration schemas, the rate-limit
//! scope catalogue, and the unified error system.
//!
//! This crate has **no** internal dependencies on other MdLibrary crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
