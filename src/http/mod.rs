//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware pipeline)
//!     → route groups (index, health, per-component schema)
//!     → versioning middleware stamps the API-version header
//!     → Send to client
//! ```

pub mod response;
pub mod server;

pub use response::ApiError;
pub use server::HttpServer;
