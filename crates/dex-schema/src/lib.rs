//! Shared types for the dex package registry.
//!
//! The registry index is produced by `dex-registry` and consumed by anything
//! that needs to know which package versions have been built.

pub mod archive;
pub mod types;

// Re-exports
pub use archive::{ARCHIVE_EXTENSION, ArchiveName};
pub use types::*;
