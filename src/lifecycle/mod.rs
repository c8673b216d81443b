//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     Trigger received → stop accepting → drain in-flight → exit
//!
//! Signals (signals.rs):
//!     SIGTERM / Ctrl+C → graceful shutdown
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
