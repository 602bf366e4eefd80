//! Generator configuration and default locations.

use crate::builder::LatestPolicy;
use crate::error::{RegistryError, Result};
use std::path::{Path, PathBuf};

/// Name of the directory packaged tarballs are written to.
pub const BUILD_DIR_NAME: &str = "build";

/// Conventional filename for the generated index.
pub const REGISTRY_FILE_NAME: &str = "registry.json";

/// Resolved settings for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Directory scanned for `*.tar.gz` archives
    pub build_dir: PathBuf,

    /// How each package's `latest` field is chosen
    pub latest: LatestPolicy,
}

impl RegistryConfig {
    /// Scan `build_dir` with the default `latest` policy.
    pub fn new(build_dir: impl Into<PathBuf>) -> Self {
        Self {
            build_dir: build_dir.into(),
            latest: LatestPolicy::default(),
        }
    }

    /// Override the `latest` policy.
    pub fn with_latest(mut self, latest: LatestPolicy) -> Self {
        self.latest = latest;
        self
    }
}

/// Default build directory: `build/` next to the directory holding the
/// running executable (`<root>/scripts/dex-registry` reads `<root>/build`).
///
/// # Errors
///
/// Returns [`RegistryError::ExecutablePath`] if the executable path cannot be determined.
pub fn default_build_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(RegistryError::ExecutablePath)?;
    Ok(build_dir_for(&exe))
}

/// Build directory relative to a given executable path.
pub fn build_dir_for(exe: &Path) -> PathBuf {
    let script_dir = exe.parent().unwrap_or(exe);
    let project_root = script_dir.parent().unwrap_or(script_dir);
    project_root.join(BUILD_DIR_NAME)
}
