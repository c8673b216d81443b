//! Path-prefix to API version resolution.
//!
//! # Responsibilities
//! - Compile the configured prefix table once at startup
//! - Resolve a request path to the version of the component that owns it
//!
//! # Design Decisions
//! - Longest matching prefix wins; declaration order breaks ties
//! - Immutable after construction (thread-safe without locks)
//! - No match is a normal outcome, not an error

use crate::config::AppConfig;
use crate::versioning::ApiVersion;

/// One entry in the version table.
#[derive(Debug, Clone)]
pub struct VersionMapping {
    pub prefix: String,
    pub version: ApiVersion,
}

/// Immutable table mapping URL path prefixes to API versions.
#[derive(Debug, Default)]
pub struct VersionResolver {
    /// Sorted longest-prefix-first; equal lengths keep declaration order.
    entries: Vec<VersionMapping>,
}

impl VersionResolver {
    pub fn new(mut entries: Vec<VersionMapping>) -> Self {
        entries.sort_by(|a, b| b.prefix.len().cmp(&a.prefix.len()));
        Self { entries }
    }

    /// Build the table from enabled components plus any extra mapping entries.
    pub fn from_config(config: &AppConfig) -> Self {
        let mut entries: Vec<VersionMapping> = config
            .components
            .iter()
            .filter(|c| c.enabled)
            .map(|c| VersionMapping {
                prefix: config.service.prefixed(&c.base_path),
                version: c.api_version,
            })
            .collect();

        entries.extend(config.version_mapping.iter().map(|m| VersionMapping {
            prefix: config.service.prefixed(&m.path_prefix),
            version: m.version,
        }));

        Self::new(entries)
    }

    /// Resolve a normalized request path to a version.
    ///
    /// Returns `None` when no configured prefix matches.
    pub fn resolve(&self, path: &str) -> Option<&ApiVersion> {
        self.entries
            .iter()
            .find(|entry| path.starts_with(&entry.prefix))
            .map(|entry| &entry.version)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
