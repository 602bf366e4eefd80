//! Build directory listing.

use crate::error::{RegistryError, Result};
use dex_schema::ARCHIVE_EXTENSION;
use std::path::{Path, PathBuf};

/// List the `*.tar.gz` entries directly inside `build_dir`.
///
/// Entries are sorted by filename bytes so the output does not depend on the
/// platform's collation. A missing directory yields no entries.
///
/// # Errors
///
/// Returns an error if the directory path cannot be turned into a glob
/// pattern, or if an entry cannot be read while listing.
pub fn scan_archives(build_dir: &Path) -> Result<Vec<PathBuf>> {
    if !build_dir.exists() {
        tracing::debug!("build directory {} does not exist", build_dir.display());
        return Ok(Vec::new());
    }

    let dir = build_dir
        .to_str()
        .ok_or_else(|| RegistryError::NonUtf8Path(build_dir.to_path_buf()))?;
    let pattern = format!("{}/*{ARCHIVE_EXTENSION}", glob::Pattern::escape(dir));

    let mut archives = glob::glob(&pattern)?.collect::<std::result::Result<Vec<_>, _>>()?;
    archives.sort_by(|a, b| {
        let a = a.file_name().map(std::ffi::OsStr::as_encoded_bytes);
        let b = b.file_name().map(std::ffi::OsStr::as_encoded_bytes);
        a.cmp(&b)
    });

    tracing::debug!(
        "found {} archives in {}",
        archives.len(),
        build_dir.display()
    );
    Ok(archives)
}
