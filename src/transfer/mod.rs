//! Transfer subsystem.
//!
//! # Data Flow
//! ```text
//! TransferConfig
//!     → workflow.rs (orchestration, one pass, no retries)
//!     → request.rs (TransferRequest → SignedTransfer)
//!     → LedgerClient::submit (exactly once)
//!     → confirmation.rs (bounded poll)
//!     → outcome.rs (TransferOutcome, exit code)
//! ```
//!
//! # Failure Semantics
//! - Any error aborts the remaining steps
//! - A transport failure during submission, a confirmation timeout and an
//!   interrupt after submission are reported as ambiguous, never as a
//!   failed transfer
//! - Final balance queries are best effort

pub mod confirmation;
pub mod error;
pub mod outcome;
pub mod progress;
pub mod request;
pub mod workflow;

pub use confirmation::ConfirmationPolicy;
pub use error::{ErrorKind, TransferError};
pub use outcome::TransferOutcome;
pub use progress::Progress;
pub use request::{SignedTransfer, TransferRequest};
pub use workflow::TransferWorkflow;
