//! Rendering the registry as `registry.json`.

use crate::config::REGISTRY_FILE_NAME;
use crate::error::{RegistryError, Result};
use dex_schema::Registry;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Render the registry as 2-space indented JSON with a trailing newline.
///
/// # Errors
///
/// Returns [`RegistryError::Json`] if serialization fails.
pub fn render(registry: &Registry) -> Result<String> {
    let mut json = serde_json::to_string_pretty(registry)?;
    json.push('\n');
    Ok(json)
}

/// Write the rendered registry to standard output.
///
/// # Errors
///
/// Returns an error if rendering fails or stdout cannot be written.
pub fn write_stdout(registry: &Registry) -> Result<()> {
    let json = render(registry)?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(json.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|source| RegistryError::Io {
            path: PathBuf::from("<stdout>"),
            source,
        })
}

/// Write the rendered registry to `path`, creating parent directories.
///
/// If `path` is an existing directory the index is written to
/// `registry.json` inside it. Returns the path actually written.
///
/// # Errors
///
/// Returns an error if rendering fails or the file cannot be written.
pub fn write_file(path: &Path, registry: &Registry) -> Result<PathBuf> {
    let target = if path.is_dir() {
        path.join(REGISTRY_FILE_NAME)
    } else {
        path.to_path_buf()
    };

    let json = render(registry)?;
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| RegistryError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(&target, json).map_err(|source| RegistryError::Io {
        path: target.clone(),
        source,
    })?;

    tracing::info!("wrote {}", target.display());
    Ok(target)
}
