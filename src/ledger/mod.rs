//! Ledger integration subsystem.
//!
//! # Data Flow
//! ```text
//! LedgerConfig (rpc_url, commitment, timeouts)
//!     → client.rs (RPC connection with timeouts)
//!     → get_balance / get_latest_blockhash / submit / confirm
//!     → types.rs (LedgerError, ConfirmationStatus)
//! ```
//!
//! # Constraints
//! - Every RPC call has a deadline
//! - Nothing here retries; the caller decides what a failure means

pub mod client;
pub mod types;

pub use client::{LedgerClient, RpcLedgerClient};
pub use types::{Commitment, ConfirmationStatus, LedgerConfig, LedgerError, LedgerResult};
