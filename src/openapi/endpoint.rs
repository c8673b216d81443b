//! Schema document endpoint.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::http::ApiError;
use crate::openapi::SchemaDocument;

/// State for one component's schema routes.
#[derive(Clone)]
pub struct SchemaState {
    pub document: Arc<SchemaDocument>,
}

/// Serve the component's description document.
///
/// Registered at `{base_path}/schema/{filename}`; the filename must be
/// `openapi` with a `.json`, `.yaml` or `.yml` extension. The response
/// content type follows the requested format.
pub async fn schema_document(
    Path(filename): Path<String>,
    State(state): State<SchemaState>,
) -> Result<Response, ApiError> {
    let (stem, extension) = filename
        .rsplit_once('.')
        .ok_or_else(|| ApiError::NotFound(format!("no schema named `{filename}`")))?;

    if stem != "openapi" {
        return Err(ApiError::NotFound(format!("no schema named `{filename}`")));
    }

    match extension {
        "json" => {
            let body = serde_json::to_vec(&*state.document)
                .map_err(|e| ApiError::Encoding(e.to_string()))?;
            Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
        }
        "yaml" | "yml" => {
            let body = serde_yaml::to_string(&*state.document)
                .map_err(|e| ApiError::Encoding(e.to_string()))?;
            Ok(([(header::CONTENT_TYPE, "application/yaml")], body).into_response())
        }
        other => Err(ApiError::UnsupportedFormat(other.to_string())),
    }
}
