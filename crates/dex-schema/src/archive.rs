//! Archive filename conventions.
//!
//! Built packages are named `<name>-<version>.tar.gz`. The version starts with
//! a `major.minor.patch` triple and may carry any suffix after it
//! (`1.0.0-rc1`, `2.3.4+build7`). Package names may themselves contain dashes
//! and digits, so the split point is the first dash after which a valid
//! version follows.

use regex::Regex;
use std::sync::LazyLock;

/// Extension every package archive carries.
pub const ARCHIVE_EXTENSION: &str = ".tar.gz";

/// Shortest name first, then the shortest version that still reaches the
/// `.tar.gz` suffix.
static ARCHIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)-(\d+\.\d+\.\d+.*?)\.tar\.gz$").expect("archive pattern is valid")
});

/// A package archive filename split into its name and version.
///
/// # Example
///
/// ```
/// use dex_schema::ArchiveName;
///
/// let archive = ArchiveName::parse("base-dev-1.0.0.tar.gz").unwrap();
/// assert_eq!(archive.name, "base-dev");
/// assert_eq!(archive.version, "1.0.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArchiveName {
    /// Package name (e.g. "base-dev")
    pub name: String,

    /// Version string including any pre-release or build suffix (e.g. "1.0.0-rc1")
    pub version: String,
}

impl ArchiveName {
    /// Split an archive filename into `(name, version)`.
    ///
    /// Returns `None` for anything that is not `<name>-<x.y.z...>.tar.gz`.
    /// Unparseable names are not an error: the caller simply skips them.
    pub fn parse(filename: &str) -> Option<Self> {
        let caps = ARCHIVE_RE.captures(filename)?;
        Some(Self {
            name: caps[1].to_string(),
            version: caps[2].to_string(),
        })
    }

    /// Reassemble the canonical filename for this archive.
    pub fn file_name(&self) -> String {
        format!("{}-{}{ARCHIVE_EXTENSION}", self.name, self.version)
    }
}

impl std::fmt::Display for ArchiveName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}
