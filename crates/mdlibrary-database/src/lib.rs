//! # mdlibrary-database
//!
//! SQLite connection management, embedded migrations, and the revision
//! repository.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::RevisionRepository;
