//! Repository implementations for MdLibrary entities.

pub mod revision;

pub use revision::RevisionRepository;
