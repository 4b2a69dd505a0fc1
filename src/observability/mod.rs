//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields (address, signature, lamports)
//!
//! Consumers:
//!     → logging.rs fmt layer on stderr, filtered by RUST_LOG or log_level
//! ```

pub mod logging;

pub use logging::init_logging;
