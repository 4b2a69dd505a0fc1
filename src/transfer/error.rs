//! Transfer error taxonomy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ledger::LedgerError;
use crate::wallet::WalletError;

/// Errors that abort a transfer run.
#[derive(Debug, Error)]
pub enum TransferError {
    /// Rejected before any derivation or network call.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Mnemonic malformed or key material unusable.
    #[error("Could not derive the sender keypair")]
    KeyDerivation(#[from] WalletError),

    /// The ledger node could not be reached.
    #[error("Ledger client unavailable during {step}")]
    ClientUnavailable {
        step: &'static str,
        #[source]
        source: LedgerError,
    },

    /// A read request to the ledger failed.
    #[error("Network error during {step}")]
    Network {
        step: &'static str,
        #[source]
        source: LedgerError,
    },

    /// Queried balance is below the requested amount. Nothing was submitted.
    #[error("Insufficient funds: need {required} lamports, have {available} lamports")]
    InsufficientFunds { required: u64, available: u64 },

    /// The transaction could not be signed with the derived keypair.
    #[error("Signing failed: {0}")]
    Signing(String),

    /// The ledger refused the submission.
    #[error("Submission failed: {reason}")]
    Submission { reason: String },

    /// The send started but no answer came back. The transfer may still land.
    #[error("Submission of {signature} unconfirmed; it may still land")]
    SubmissionUnconfirmed {
        signature: String,
        #[source]
        source: LedgerError,
    },

    /// Submitted, but not observed at the target commitment within the bound.
    /// The transfer may still land.
    #[error("Transaction {signature} not confirmed within {waited_secs}s; it may still land")]
    ConfirmationTimeout { signature: String, waited_secs: u64 },

    /// Landed on-chain with an execution error.
    #[error("Transaction {signature} failed on-chain: {reason}")]
    TransactionFailed { signature: String, reason: String },

    /// Interrupted by the operator.
    #[error("Interrupted {}", interrupted_detail(.signature))]
    Interrupted { signature: Option<String> },
}

impl TransferError {
    /// Map a ledger read failure for the named step.
    pub fn from_ledger(step: &'static str, err: LedgerError) -> Self {
        match err {
            LedgerError::Unavailable(_) => Self::ClientUnavailable { step, source: err },
            _ => Self::Network { step, source: err },
        }
    }

    /// Machine-readable category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidConfig(_) => ErrorKind::InvalidConfig,
            Self::KeyDerivation(_) => ErrorKind::KeyDerivation,
            Self::ClientUnavailable { .. } => ErrorKind::ClientUnavailable,
            Self::Network { .. } => ErrorKind::Network,
            Self::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
            Self::Signing(_) => ErrorKind::Signing,
            Self::Submission { .. } => ErrorKind::Submission,
            Self::SubmissionUnconfirmed { .. } => ErrorKind::SubmissionUnconfirmed,
            Self::ConfirmationTimeout { .. } => ErrorKind::ConfirmationTimeout,
            Self::TransactionFailed { .. } => ErrorKind::TransactionFailed,
            Self::Interrupted { .. } => ErrorKind::Interrupted,
        }
    }

    /// Signature of a transaction that was already submitted, if any.
    pub fn submitted_signature(&self) -> Option<&str> {
        match self {
            Self::SubmissionUnconfirmed { signature, .. }
            | Self::ConfirmationTimeout { signature, .. }
            | Self::TransactionFailed { signature, .. } => Some(signature),
            Self::Interrupted { signature } => signature.as_deref(),
            _ => None,
        }
    }
}

fn interrupted_detail(signature: &Option<String>) -> String {
    match signature {
        Some(sig) => format!("after submitting {}; it may still land", sig),
        None => "before submission; nothing was sent".to_string(),
    }
}

/// Error category reported in [`TransferOutcome`](crate::transfer::TransferOutcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidConfig,
    KeyDerivation,
    ClientUnavailable,
    Network,
    InsufficientFunds,
    Signing,
    Submission,
    SubmissionUnconfirmed,
    ConfirmationTimeout,
    TransactionFailed,
    Interrupted,
}

impl ErrorKind {
    /// True when a transaction was (or may have been) sent to the ledger.
    pub fn outcome_is_ambiguous(self) -> bool {
        matches!(
            self,
            Self::SubmissionUnconfirmed | Self::ConfirmationTimeout | Self::Interrupted
        )
    }
}
