//! Customer-interaction API gateway.
//!
//! Serves a set of independently versioned API components behind one
//! listener. Every response is stamped with an `API-version` header
//! resolved from the request path, and each component publishes its API
//! description document in JSON and YAML encodings.
//!
//! # Architecture Overview
//!
//! ```text
//!                 ┌────────────────────────────────────────────────┐
//!                 │                 KLANT GATEWAY                   │
//!                 │                                                 │
//!   Request ──────┼─▶ http/server ─▶ security ─▶ route groups       │
//!                 │        │            │            │              │
//!                 │        │            │            ├── index      │
//!                 │        │            │            ├── health     │
//!                 │        │            │            └── {component}│
//!                 │        │            │                 /schema   │
//!   Response ◀────┼── versioning middleware (API-version header)    │
//!                 │                                                 │
//!                 │  Cross-cutting: config · observability ·        │
//!                 │                 lifecycle                       │
//!                 └────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod openapi;
pub mod security;
pub mod versioning;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
