//! Bounded confirmation wait.
//!
//! # Responsibilities
//! - Poll the ledger on a fixed interval until the target commitment is met
//! - Stop at an on-chain failure
//! - Give up at the deadline without claiming the transfer failed

use solana_sdk::signature::Signature;
use std::time::Duration;
use tokio::time::{interval, timeout, MissedTickBehavior};

use crate::ledger::{Commitment, ConfirmationStatus, LedgerClient};
use crate::transfer::error::TransferError;

/// Confirmation wait parameters.
#[derive(Debug, Clone, Copy)]
pub struct ConfirmationPolicy {
    /// Commitment level that counts as confirmed.
    pub commitment: Commitment,
    /// Upper bound on the whole wait.
    pub timeout: Duration,
    /// Delay between status polls.
    pub poll_interval: Duration,
}

/// Wait for `signature` to reach the policy's commitment.
///
/// A failed status poll is logged and polling continues until the deadline.
pub async fn wait_for_confirmation(
    ledger: &dyn LedgerClient,
    signature: &Signature,
    policy: ConfirmationPolicy,
) -> Result<ConfirmationStatus, TransferError> {
    let result = timeout(policy.timeout, async {
        let mut ticker = interval(policy.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let status = match ledger.confirm(signature).await {
                Ok(status) => status,
                Err(e) => {
                    tracing::warn!(%signature, error = %e, "Status poll failed");
                    continue;
                }
            };

            match status {
                ConfirmationStatus::Failed(reason) => {
                    return Err(TransferError::TransactionFailed {
                        signature: signature.to_string(),
                        reason,
                    });
                }
                status if status.satisfies(policy.commitment) => return Ok(status),
                status => {
                    tracing::debug!(
                        %signature,
                        status = ?status,
                        target = ?policy.commitment,
                        "Waiting for confirmation"
                    );
                }
            }
        }
    })
    .await;

    match result {
        Ok(outcome) => outcome,
        Err(_) => Err(TransferError::ConfirmationTimeout {
            signature: signature.to_string(),
            waited_secs: policy.timeout.as_secs(),
        }),
    }
}
