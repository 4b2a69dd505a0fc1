//! Ledger-specific types and error definitions.

use serde::{Deserialize, Serialize};
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::native_token::LAMPORTS_PER_SOL;
use thiserror::Error;

// Re-export LedgerConfig from config module to avoid duplication
pub use crate::config::schema::LedgerConfig;

/// Errors that can occur while talking to the ledger node.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The node could not be reached at all (refused, DNS, TLS).
    #[error("Ledger node unavailable: {0}")]
    Unavailable(String),

    /// Request reached the transport but failed.
    #[error("Network error: {0}")]
    Network(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// The node answered and refused the request.
    #[error("Rejected by ledger: {0}")]
    Rejected(String),
}

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Commitment level the workflow waits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl Commitment {
    /// Equivalent solana-sdk commitment.
    pub fn to_config(self) -> CommitmentConfig {
        match self {
            Self::Processed => CommitmentConfig::processed(),
            Self::Confirmed => CommitmentConfig::confirmed(),
            Self::Finalized => CommitmentConfig::finalized(),
        }
    }
}

impl std::str::FromStr for Commitment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "processed" => Ok(Self::Processed),
            "confirmed" => Ok(Self::Confirmed),
            "finalized" => Ok(Self::Finalized),
            other => Err(format!("unknown commitment level '{}'", other)),
        }
    }
}

/// Transaction confirmation status as reported by one poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationStatus {
    /// Signature not yet known to the node.
    Pending,
    /// Included in a block on the node's fork.
    Processed,
    /// Voted on by a supermajority.
    Confirmed,
    /// Rooted; cannot be rolled back.
    Finalized,
    /// Landed on-chain with an execution error.
    Failed(String),
}

impl ConfirmationStatus {
    /// True when this status meets or exceeds `target`.
    pub fn satisfies(&self, target: Commitment) -> bool {
        let reached = match self {
            Self::Processed => Commitment::Processed,
            Self::Confirmed => Commitment::Confirmed,
            Self::Finalized => Commitment::Finalized,
            Self::Pending | Self::Failed(_) => return false,
        };
        reached >= target
    }
}

/// Convert a human-facing SOL amount to lamports, rounding to the nearest
/// lamport. Returns `None` for non-positive, non-finite, sub-lamport or
/// out-of-range amounts.
pub fn sol_to_lamports(sol: f64) -> Option<u64> {
    if !sol.is_finite() || sol <= 0.0 {
        return None;
    }
    let lamports = (sol * LAMPORTS_PER_SOL as f64).round();
    if lamports < 1.0 || lamports >= u64::MAX as f64 {
        return None;
    }
    Some(lamports as u64)
}

/// Convert lamports to SOL for display.
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}
