//! Security response headers.
//!
//! # Responsibilities
//! - Add clickjacking and sniffing protections to every response
//! - Leave headers alone when a handler already set them
//!
//! # Design Decisions
//! - Headers are plain `SetResponseHeader` layers, no custom service
//! - Applied site-wide; the flag in SecurityConfig gates registration

use axum::http::{header, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

/// Wrap the router with the standard security response headers.
pub fn apply(router: Router) -> Router {
    router
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("same-origin"),
        ))
}
