//! Response middleware stamping the `API-version` header.

use axum::extract::{Request, State};
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use crate::versioning::VersionResolver;

/// Name of the response header carrying the resolved API version.
pub const API_VERSION_HEADER: HeaderName = HeaderName::from_static("api-version");

/// Attach the resolved API version to every outgoing response.
///
/// Resolution uses the path of the incoming request, captured before the
/// inner handlers run. Paths outside the version table leave the response
/// untouched.
pub async fn version_headers(
    State(resolver): State<Arc<VersionResolver>>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();
    let mut response = next.run(request).await;

    if let Some(version) = resolver.resolve(&path) {
        match HeaderValue::from_str(&version.to_string()) {
            Ok(value) => {
                response.headers_mut().insert(API_VERSION_HEADER, value);
            }
            Err(error) => {
                tracing::warn!(%version, %error, "version is not a valid header value");
            }
        }
    }

    response
}
