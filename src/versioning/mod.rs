//! API versioning subsystem.
//!
//! # Data Flow
//! ```text
//! Version table compilation (at startup):
//!     components + extra mapping entries
//!     → prefix with the configured service subpath
//!     → sort longest-prefix-first
//!     → freeze as immutable VersionResolver
//!
//! Per request:
//!     middleware captures the request path
//!     → inner handlers produce the response
//!     → resolver maps path to a version
//!     → `API-version` response header set when one resolves
//! ```
//!
//! # Design Decisions
//! - Resolution is a pure function over an immutable table
//! - The most specific (longest) prefix wins
//! - Unmatched paths are silent, not errors

pub mod middleware;
pub mod resolver;
pub mod version;

pub use middleware::{version_headers, API_VERSION_HEADER};
pub use resolver::{VersionMapping, VersionResolver};
pub use version::{ApiVersion, VersionParseError};
