//! # mdlibrary-service
//!
//! Business logic service layer for MdLibrary. [`LibraryService`] implements
//! the record use cases on top of the revision repository, delegating version
//! numbering to [`VersionAllocator`] and HTML generation to
//! [`MarkdownRenderer`].
//!
//! Services follow constructor injection: all dependencies are provided at
//! construction time.

pub mod library;
pub mod render;

pub use library::{LibraryService, RevisionDetail, RevisionSummary, VersionAllocator};
pub use render::MarkdownRenderer;
