//! Core type definitions used across the MdLibrary workspace.

pub mod scope;

pub use scope::RateScope;
