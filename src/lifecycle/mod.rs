//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGINT/SIGTERM → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     broadcast → TransferWorkflow::run_until
//!         before submit: stop, nothing sent
//!         during confirmation wait: stop, report signature
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
