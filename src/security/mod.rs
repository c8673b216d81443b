//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → hosts.rs (Host header allowlist check)
//!     → Pass to inner pipeline
//!
//! Outgoing response:
//!     → headers.rs (security response headers)
//! ```
//!
//! # Design Decisions
//! - Fail closed: reject on any security check failure
//! - Both stages are flag/config gated at startup

pub mod headers;
pub mod hosts;

pub use hosts::{enforce_allowed_hosts, AllowedHosts};
