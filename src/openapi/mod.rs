//! API description documents and their exposure.

pub mod document;
pub mod endpoint;

pub use document::{document_for, SchemaDocument, SchemaError, MINIMUM_DOCUMENT_VERSION};
pub use endpoint::{schema_document, SchemaState};
