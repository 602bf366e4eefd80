//! Generates the dex registry index from packaged tarballs.
//!
//! Scans a build directory for `<name>-<version>.tar.gz` archives and folds
//! them into a [`Registry`](dex_schema::Registry) that is rendered as
//! `registry.json`. The index is regenerated from scratch on every run.

pub mod builder;
pub mod config;
pub mod emit;
pub mod error;
pub mod scan;

pub use builder::{LatestPolicy, RegistryBuilder};
pub use config::RegistryConfig;
pub use error::{RegistryError, Result};

use dex_schema::Registry;

/// Scan `config.build_dir` and build the registry.
///
/// A missing build directory produces an empty registry.
///
/// # Errors
///
/// Returns an error if the build directory cannot be listed.
pub fn generate_registry(config: &RegistryConfig) -> Result<Registry> {
    let archives = scan::scan_archives(&config.build_dir)?;

    let mut builder = RegistryBuilder::new(config.latest);
    let mut skipped = 0usize;
    for path in &archives {
        // Non-UTF-8 names can never match the archive pattern.
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            tracing::debug!("skipping non UTF-8 name {}", path.display());
            skipped += 1;
            continue;
        };
        if !builder.add_file_name(file_name) {
            skipped += 1;
        }
    }

    let registry = builder.build();
    tracing::info!(
        "indexed {} packages ({} archives, {} skipped) from {}",
        registry.len(),
        registry.archive_count(),
        skipped,
        config.build_dir.display()
    );
    Ok(registry)
}
