//! Folds parsed archives into a [`Registry`].

use dex_schema::{ArchiveName, Registry};

/// How a package's `latest` field is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LatestPolicy {
    /// The most recently processed archive wins, whatever its version.
    ///
    /// Archives are processed in filename order, so this matches the highest
    /// version only while versions sort the same way as their filenames
    /// (`pkg-10.0.0` sorts before `pkg-9.0.0`).
    #[default]
    LastSeen,

    /// The highest semantic version wins. Versions that are not valid semver
    /// rank below all valid ones; among equal versions the later one wins.
    Highest,
}

impl LatestPolicy {
    /// Whether `candidate` should replace `current` as the latest version.
    pub fn replaces(self, current: &str, candidate: &str) -> bool {
        match self {
            Self::LastSeen => true,
            Self::Highest => {
                let current = semver::Version::parse(current).ok();
                let candidate = semver::Version::parse(candidate).ok();
                match (current, candidate) {
                    (Some(current), Some(candidate)) => candidate >= current,
                    (Some(_), None) => false,
                    (None, _) => true,
                }
            }
        }
    }
}

/// Accumulates archives into a registry, one filename at a time.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    registry: Registry,
    policy: LatestPolicy,
}

impl RegistryBuilder {
    /// Create an empty builder using `policy` for `latest`.
    pub fn new(policy: LatestPolicy) -> Self {
        Self {
            registry: Registry::new(),
            policy,
        }
    }

    /// Record one archive. Every archive is appended to its package's
    /// version list, duplicates included.
    pub fn add(&mut self, archive: ArchiveName) {
        let (entry, created) = self
            .registry
            .entry_or_insert(&archive.name, &archive.version);
        if created {
            tracing::debug!("new package {archive}");
            return;
        }

        if entry.contains(&archive.version) {
            tracing::debug!("duplicate archive {archive}");
        }
        entry.versions.push(archive.version.clone());
        if self.policy.replaces(&entry.latest, &archive.version) {
            entry.latest = archive.version;
        }
    }

    /// Parse `file_name` and record it. Returns false if the name is not a
    /// package archive, in which case it is skipped.
    pub fn add_file_name(&mut self, file_name: &str) -> bool {
        match ArchiveName::parse(file_name) {
            Some(archive) => {
                self.add(archive);
                true
            }
            None => {
                tracing::debug!("skipping {file_name}: not <name>-<version>.tar.gz");
                false
            }
        }
    }

    /// Finish and return the registry.
    pub fn build(self) -> Registry {
        self.registry
    }
}
