//! Structured result of a transfer run.

use serde::Serialize;
use std::error::Error;

use crate::transfer::error::{ErrorKind, TransferError};

/// Everything the operator needs to know about one run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransferOutcome {
    /// True only when the transfer reached the target commitment.
    pub success: bool,

    /// Sender address, once derived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,

    /// Transaction signature, once submitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,

    /// Block explorer link for the signature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explorer_url: Option<String>,

    /// Sender balance in SOL after confirmation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_sender_balance: Option<f64>,

    /// Recipient balance in SOL after confirmation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_recipient_balance: Option<f64>,

    /// Failure category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorKind>,

    /// Human-readable failure message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Underlying causes of the failure, outermost first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub causes: Vec<String>,
}

impl TransferOutcome {
    /// Record a failure. A signature carried by the error is kept.
    pub fn fail(mut self, err: &TransferError) -> Self {
        self.success = false;
        if let Some(signature) = err.submitted_signature() {
            self.signature = Some(signature.to_string());
        }
        self.error = Some(err.kind());
        self.message = Some(err.to_string());

        let mut source = err.source();
        while let Some(cause) = source {
            self.causes.push(cause.to_string());
            source = cause.source();
        }
        self
    }

    /// Process exit code: 0 on success, 1 on any failure.
    pub fn exit_code(&self) -> u8 {
        if self.success {
            0
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::LedgerError;

    #[test]
    fn test_exit_codes() {
        let ok = TransferOutcome {
            success: true,
            ..Default::default()
        };
        assert_eq!(ok.exit_code(), 0);
        assert_eq!(TransferOutcome::default().exit_code(), 1);
    }

    #[test]
    fn test_fail_keeps_submitted_signature() {
        let outcome = TransferOutcome::default().fail(&TransferError::ConfirmationTimeout {
            signature: "5sig".to_string(),
            waited_secs: 1,
        });
        assert!(!outcome.success);
        assert_eq!(outcome.signature.as_deref(), Some("5sig"));
        assert_eq!(outcome.error, Some(ErrorKind::ConfirmationTimeout));
    }

    #[test]
    fn test_fail_records_cause_chain() {
        let outcome = TransferOutcome::default().fail(&TransferError::from_ledger(
            "blockhash fetch",
            LedgerError::Network("connection reset".to_string()),
        ));
        assert_eq!(
            outcome.message.as_deref(),
            Some("Network error during blockhash fetch")
        );
        assert_eq!(outcome.causes, vec!["Network error: connection reset".to_string()]);
    }

    #[test]
    fn test_json_omits_empty_fields() {
        let outcome = TransferOutcome::default().fail(&TransferError::InsufficientFunds {
            required: 2,
            available: 1,
        });
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "insufficient_funds");
        assert!(json.get("signature").is_none());
        assert!(json.get("final_sender_balance").is_none());
        assert!(json.get("causes").is_none());
    }
}
