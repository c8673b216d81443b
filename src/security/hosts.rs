//! Host header allowlisting.
//!
//! # Responsibilities
//! - Reject requests whose Host is not on the configured allowlist
//! - Pass everything through when no allowlist is configured
//!
//! # Design Decisions
//! - Comparison is case-insensitive and ignores the port
//! - Rejection happens before any handler runs

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::http::ApiError;

/// Immutable allowlist shared with the middleware.
#[derive(Debug, Clone)]
pub struct AllowedHosts {
    hosts: Arc<Vec<String>>,
}

impl AllowedHosts {
    pub fn new(hosts: &[String]) -> Self {
        Self {
            hosts: Arc::new(hosts.iter().map(|h| h.to_lowercase()).collect()),
        }
    }

    /// An empty allowlist accepts every host.
    pub fn is_open(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn permits(&self, host: &str) -> bool {
        let host = host.to_lowercase();
        self.hosts.iter().any(|allowed| *allowed == host)
    }
}

pub async fn enforce_allowed_hosts(
    State(allowed): State<AllowedHosts>,
    request: Request,
    next: Next,
) -> Response {
    if allowed.is_open() {
        return next.run(request).await;
    }

    let permitted = request
        .headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .or_else(|| request.uri().host())
        .map(|host| allowed.permits(strip_port(host)))
        .unwrap_or(false);

    if permitted {
        next.run(request).await
    } else {
        ApiError::DisallowedHost.into_response()
    }
}

/// Drop a trailing `:port`, keeping IPv6 literals intact.
fn strip_port(host: &str) -> &str {
    if let Some(stripped) = host.strip_prefix('[') {
        return stripped.split(']').next().unwrap_or(host);
    }
    host.split(':').next().unwrap_or(host)
}
