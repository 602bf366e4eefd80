//! Registry generation errors.

use std::path::PathBuf;

/// Errors that can occur while generating the registry index.
///
/// Unparseable archive names are not errors; they are skipped during the scan.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The glob pattern built from the build directory is invalid.
    #[error("invalid archive pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// A directory entry could not be read while listing archives.
    #[error("failed to read {}: {}", .0.path().display(), .0.error())]
    Glob(#[from] glob::GlobError),

    /// The build directory cannot be expressed as a glob pattern.
    #[error("build directory is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    /// Writing the index failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// File or stream being written
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The registry could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The running executable could not be located to derive the default build directory.
    #[error("could not locate the running executable: {0}")]
    ExecutablePath(std::io::Error),
}

/// Convenience alias for registry results.
pub type Result<T> = std::result::Result<T, RegistryError>;
