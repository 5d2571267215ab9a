//! Versioned document library use cases.

pub mod projection;
pub mod service;
pub mod version;

pub use projection::{RevisionDetail, RevisionSummary};
pub use service::LibraryService;
pub use version::VersionAllocator;
