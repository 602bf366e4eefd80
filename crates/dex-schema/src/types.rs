//! Registry index data model.

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Serialize};

/// All known versions of a single package.
///
/// `versions` keeps every archive seen for the package, in the order the
/// archives were processed, duplicates included. `latest` is chosen by the
/// producer; the default producer records the last processed version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageEntry {
    /// Version strings in processing order (e.g. `["1.0.0", "1.2.0"]`)
    pub versions: Vec<String>,

    /// The version advertised as current
    pub latest: String,
}

impl PackageEntry {
    /// Create an entry whose only known version is `version`.
    pub fn new(version: impl Into<String>) -> Self {
        let version = version.into();
        Self {
            versions: vec![version.clone()],
            latest: version,
        }
    }

    /// Returns true if `version` has been recorded at least once.
    pub fn contains(&self, version: &str) -> bool {
        self.versions.iter().any(|v| v == version)
    }
}

/// The registry index (`registry.json`).
///
/// Serializes as `{"packages": {"<name>": {"versions": [...], "latest": "..."}}}`.
/// Packages keep their insertion order so the rendered index follows the
/// order in which archives were discovered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    /// Package name → entry
    pub packages: IndexMap<String, PackageEntry>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a package by name.
    pub fn find(&self, name: &str) -> Option<&PackageEntry> {
        self.packages.get(name)
    }

    /// Get the entry for `name`, creating it with `version` as its first
    /// and latest version if it does not exist yet.
    ///
    /// Returns the entry and whether it was newly created.
    pub fn entry_or_insert(&mut self, name: &str, version: &str) -> (&mut PackageEntry, bool) {
        match self.packages.entry(name.to_string()) {
            Entry::Occupied(e) => (e.into_mut(), false),
            Entry::Vacant(e) => (e.insert(PackageEntry::new(version)), true),
        }
    }

    /// Number of distinct packages.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Returns true if no package has been recorded.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Total number of archives recorded across all packages.
    pub fn archive_count(&self) -> usize {
        self.packages.values().map(|p| p.versions.len()).sum()
    }
}
