//! API description document model.
//!
//! # Responsibilities
//! - Deserialize component documents from YAML files
//! - Generate a minimal document for components without one
//! - Enforce the minimum supported document version at load time
//!
//! # Design Decisions
//! - Unknown document fields are preserved verbatim, so hand-written
//!   documents round-trip through both encodings unchanged
//! - Documents below the minimum version are rejected at startup,
//!   never at request time

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use crate::config::ComponentConfig;
use crate::versioning::ApiVersion;

/// Document version written into generated documents.
const DOCUMENT_VERSION: &str = "3.0.3";

/// Oldest document version the gateway will serve.
pub const MINIMUM_DOCUMENT_VERSION: ApiVersion = ApiVersion {
    major: 3,
    minor: 0,
    patch: 0,
};

/// A machine-readable API description for one component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaDocument {
    /// Document format version, e.g. "3.0.3".
    pub openapi: String,

    pub info: DocumentInfo,

    #[serde(default)]
    pub paths: Map<String, Value>,

    /// Any further top-level fields from a source file (servers,
    /// components, tags, ...), carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `info` block of a description document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub title: String,

    /// Version of the described API, independent of `openapi`.
    pub version: ApiVersion,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Error type for document loading and encoding.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("failed to read schema document {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse schema document {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("schema document {path} reports version `{found}`, minimum supported is {minimum}")]
    UnsupportedVersion {
        path: PathBuf,
        found: String,
        minimum: ApiVersion,
    },
}

impl SchemaDocument {
    /// Generate a minimal document from component metadata.
    pub fn generated(name: &str, version: ApiVersion) -> Self {
        Self {
            openapi: DOCUMENT_VERSION.to_string(),
            info: DocumentInfo {
                title: format!("{name} API"),
                version,
                description: None,
            },
            paths: Map::new(),
            extra: Map::new(),
        }
    }

    /// Parse a document from YAML text.
    pub fn from_yaml(raw: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(raw)
    }

    /// Load a document from a YAML file, enforcing the minimum version.
    pub fn from_yaml_file(path: &Path) -> Result<Self, SchemaError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document = Self::from_yaml(&raw).map_err(|source| SchemaError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if !document.meets_minimum_version() {
            return Err(SchemaError::UnsupportedVersion {
                path: path.to_path_buf(),
                found: document.openapi.clone(),
                minimum: MINIMUM_DOCUMENT_VERSION,
            });
        }

        Ok(document)
    }

    /// The `openapi` field parsed as a version, if well-formed.
    pub fn document_version(&self) -> Option<ApiVersion> {
        self.openapi.parse().ok()
    }

    pub fn meets_minimum_version(&self) -> bool {
        self.document_version()
            .is_some_and(|version| version >= MINIMUM_DOCUMENT_VERSION)
    }
}

/// Resolve the description document for a component: from its configured
/// file when one is set, generated otherwise.
pub fn document_for(component: &ComponentConfig) -> Result<SchemaDocument, SchemaError> {
    match &component.schema_path {
        Some(path) => {
            let document = SchemaDocument::from_yaml_file(path)?;
            tracing::info!(
                component = %component.name,
                path = %path.display(),
                openapi = %document.openapi,
                "loaded schema document"
            );
            Ok(document)
        }
        None => Ok(SchemaDocument::generated(
            &component.name,
            component.api_version,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_document_meets_minimum() {
        let document = SchemaDocument::generated("klanten", ApiVersion::new(1, 0, 0));

        assert_eq!(document.openapi, "3.0.3");
        assert_eq!(document.info.title, "klanten API");
        assert_eq!(document.info.version, ApiVersion::new(1, 0, 0));
        assert!(document.meets_minimum_version());
    }

    #[test]
    fn yaml_round_trip_preserves_unknown_fields() {
        let raw = r#"
openapi: "3.0.0"
info:
  title: Contactmomenten API
  version: 1.0.0
paths: {}
servers:
  - url: https://example.com/contactmomenten/api/v1
"#;
        let document = SchemaDocument::from_yaml(raw).unwrap();

        assert!(document.extra.contains_key("servers"));

        let json = serde_json::to_value(&document).unwrap();
        assert_eq!(json["openapi"], "3.0.0");
        assert_eq!(json["info"]["version"], "1.0.0");
        assert_eq!(
            json["servers"][0]["url"],
            "https://example.com/contactmomenten/api/v1"
        );
    }

    #[test]
    fn old_documents_fail_the_minimum_check() {
        let raw = r#"
openapi: "2.0"
info:
  title: Klanten API
  version: 1.0.0
"#;
        let document = SchemaDocument::from_yaml(raw).unwrap();
        assert!(!document.meets_minimum_version());
    }

    #[test]
    fn file_below_minimum_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("openapi.yaml");
        std::fs::write(
            &path,
            "openapi: \"2.0\"\ninfo:\n  title: Klanten API\n  version: 1.0.0\n",
        )
        .unwrap();

        let error = SchemaDocument::from_yaml_file(&path).unwrap_err();
        assert!(matches!(error, SchemaError::UnsupportedVersion { .. }));
    }
}
