//! End-to-end single transfer.
//!
//! # Steps
//! ```text
//! validate config → derive keypair → sender balance → funds check
//!     → latest blockhash → build + sign → submit (once)
//!     → confirmation wait → final balances
//! ```
//!
//! Each step runs once, in order. The balance check is not atomic with the
//! submission; the ledger may still reject the transfer for lack of funds,
//! which surfaces as a submission error.

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::config::validation::{parse_recipient, validate_config};
use crate::config::TransferConfig;
use crate::ledger::types::{lamports_to_sol, sol_to_lamports};
use crate::ledger::{LedgerClient, LedgerError};
use crate::transfer::confirmation::{wait_for_confirmation, ConfirmationPolicy};
use crate::transfer::error::TransferError;
use crate::transfer::outcome::TransferOutcome;
use crate::transfer::progress::Progress;
use crate::transfer::request::{SignedTransfer, TransferRequest};
use crate::wallet::{KeyDeriver, SecretPhrase};

/// Orchestrates one transfer against injected collaborators.
pub struct TransferWorkflow {
    config: TransferConfig,
    deriver: Arc<dyn KeyDeriver>,
    ledger: Arc<dyn LedgerClient>,
    policy: ConfirmationPolicy,
    progress: Progress,
}

/// Validated amount and recipient.
struct TransferPlan {
    recipient: Pubkey,
    lamports: u64,
}

impl TransferWorkflow {
    pub fn new(
        config: TransferConfig,
        deriver: Arc<dyn KeyDeriver>,
        ledger: Arc<dyn LedgerClient>,
    ) -> Self {
        let policy = ConfirmationPolicy {
            commitment: config.ledger.commitment,
            timeout: Duration::from_secs(config.ledger.confirmation_timeout_secs),
            poll_interval: Duration::from_millis(config.ledger.poll_interval_ms),
        };
        let progress = Progress::new(config.observability.progress);

        Self {
            config,
            deriver,
            ledger,
            policy,
            progress,
        }
    }

    /// Override the confirmation wait derived from the config.
    pub fn with_confirmation_policy(mut self, policy: ConfirmationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Override progress output.
    pub fn with_progress(mut self, progress: Progress) -> Self {
        self.progress = progress;
        self
    }

    /// Run the transfer to completion.
    pub async fn run(&self) -> TransferOutcome {
        self.run_until(std::future::pending::<()>()).await
    }

    /// Run the transfer, stopping early when `interrupt` resolves.
    ///
    /// An interrupt before submission leaves no side effect. An interrupt
    /// during the confirmation wait reports the submitted signature. The
    /// submission itself always runs to completion once started.
    pub async fn run_until<F>(&self, interrupt: F) -> TransferOutcome
    where
        F: Future<Output = ()>,
    {
        let mut outcome = TransferOutcome::default();
        match self.execute(&mut outcome, interrupt).await {
            Ok(()) => {
                tracing::info!(signature = ?outcome.signature, "Transfer complete");
                outcome
            }
            Err(e) => {
                let outcome = outcome.fail(&e);
                tracing::error!(
                    kind = ?e.kind(),
                    error = %e,
                    causes = ?outcome.causes,
                    "Transfer failed"
                );
                outcome
            }
        }
    }

    async fn execute<F>(
        &self,
        outcome: &mut TransferOutcome,
        interrupt: F,
    ) -> Result<(), TransferError>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(interrupt);

        let plan = self.plan()?;

        let signed = tokio::select! {
            biased;
            _ = &mut interrupt => return Err(TransferError::Interrupted { signature: None }),
            prepared = self.prepare(&plan, outcome) => prepared?,
        };
        let sender = *signed.request().from();

        let signature = self.submit(&signed).await?;
        outcome.signature = Some(signature.to_string());
        outcome.explorer_url = self.config.ledger.explorer_url(&signature.to_string());

        self.progress.step(format!("Signature: {}", signature));
        if let Some(url) = &outcome.explorer_url {
            self.progress.step(format!("Explorer: {}", url));
        }

        self.progress.step("Waiting for confirmation...");
        let status = tokio::select! {
            biased;
            _ = &mut interrupt => {
                return Err(TransferError::Interrupted {
                    signature: Some(signature.to_string()),
                })
            }
            status = wait_for_confirmation(self.ledger.as_ref(), &signature, self.policy) => {
                status?
            }
        };
        tracing::info!(%signature, status = ?status, "Transfer confirmed");
        self.progress.step("Transfer confirmed.");
        outcome.success = true;

        self.report_final_balances(&sender, &plan.recipient, outcome).await;
        Ok(())
    }

    /// Step 0: reject bad input before any derivation or network call.
    fn plan(&self) -> Result<TransferPlan, TransferError> {
        validate_config(&self.config).map_err(|errors| {
            TransferError::InvalidConfig(
                errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
            )
        })?;

        let recipient = parse_recipient(&self.config.transfer.recipient)
            .map_err(|e| TransferError::InvalidConfig(e.to_string()))?;
        let lamports = sol_to_lamports(self.config.transfer.amount_sol).ok_or_else(|| {
            TransferError::InvalidConfig(format!(
                "invalid amount {}",
                self.config.transfer.amount_sol
            ))
        })?;

        Ok(TransferPlan {
            recipient,
            lamports,
        })
    }

    /// Steps 1-6: derive, check funds, build and sign. No side effects.
    async fn prepare(
        &self,
        plan: &TransferPlan,
        outcome: &mut TransferOutcome,
    ) -> Result<SignedTransfer, TransferError> {
        self.progress.step("Deriving keypair from mnemonic...");
        let phrase = self
            .config
            .wallet
            .mnemonic
            .as_ref()
            .ok_or_else(|| TransferError::InvalidConfig("no mnemonic configured".to_string()))?;
        let keypair = self.derive(phrase, &self.config.wallet.passphrase)?;
        let sender = keypair.pubkey();
        outcome.sender = Some(sender.to_string());

        self.progress.step(format!("Source wallet: {}", sender));
        self.progress.step(format!("Recipient wallet: {}", plan.recipient));
        self.progress
            .step(format!("Connecting to {}...", self.config.ledger.rpc_url));

        let balance = self
            .ledger
            .get_balance(&sender)
            .await
            .map_err(|e| TransferError::from_ledger("balance query", e))?;
        tracing::info!(%sender, balance_lamports = balance, "Sender balance");
        self.progress
            .step(format!("Source balance: {} SOL", lamports_to_sol(balance)));

        if balance < plan.lamports {
            return Err(TransferError::InsufficientFunds {
                required: plan.lamports,
                available: balance,
            });
        }

        let blockhash = self
            .ledger
            .get_latest_blockhash()
            .await
            .map_err(|e| TransferError::from_ledger("blockhash fetch", e))?;
        tracing::debug!(%blockhash, "Fetched latest blockhash");

        TransferRequest::new(sender, plan.recipient, plan.lamports, blockhash).sign(&keypair)
    }

    fn derive(
        &self,
        phrase: &SecretPhrase,
        passphrase: &SecretPhrase,
    ) -> Result<Keypair, TransferError> {
        tracing::debug!(words = phrase.word_count(), "Deriving keypair");
        Ok(self.deriver.derive_keypair(phrase, passphrase)?)
    }

    /// Step 7: exactly one submission, never retried.
    ///
    /// Only an explicit refusal from the ledger counts as a failed send.
    async fn submit(&self, signed: &SignedTransfer) -> Result<Signature, TransferError> {
        let lamports = signed.request().lamports();
        self.progress
            .step(format!("Transferring {} SOL...", lamports_to_sol(lamports)));
        tracing::info!(
            to = %signed.request().to(),
            lamports,
            "Submitting transfer"
        );

        let signature = self
            .ledger
            .submit(signed.transaction())
            .await
            .map_err(|e| match e {
                LedgerError::Rejected(reason) => TransferError::Submission { reason },
                // The node may have received it; keep the signature to look it up
                other => TransferError::SubmissionUnconfirmed {
                    signature: signed.signature().to_string(),
                    source: other,
                },
            })?;

        if signature != *signed.signature() {
            tracing::warn!(
                expected = %signed.signature(),
                returned = %signature,
                "Ledger returned an unexpected signature"
            );
        }
        self.progress.step("Transfer submitted.");
        Ok(signature)
    }

    /// Step 9: best effort; failures are warnings.
    async fn report_final_balances(
        &self,
        sender: &Pubkey,
        recipient: &Pubkey,
        outcome: &mut TransferOutcome,
    ) {
        match self.ledger.get_balance(sender).await {
            Ok(lamports) => outcome.final_sender_balance = Some(lamports_to_sol(lamports)),
            Err(e) => {
                tracing::warn!(address = %sender, error = %e, "Final sender balance unavailable")
            }
        }
        match self.ledger.get_balance(recipient).await {
            Ok(lamports) => outcome.final_recipient_balance = Some(lamports_to_sol(lamports)),
            Err(e) => tracing::warn!(
                address = %recipient,
                error = %e,
                "Final recipient balance unavailable"
            ),
        }

        self.progress.step("Final balances:");
        self.progress.step(format!(
            "   Source: {}",
            format_balance(outcome.final_sender_balance)
        ));
        self.progress.step(format!(
            "   Recipient: {}",
            format_balance(outcome.final_recipient_balance)
        ));
    }
}

fn format_balance(balance: Option<f64>) -> String {
    match balance {
        Some(sol) => format!("{} SOL", sol),
        None => "unavailable".to_string(),
    }
}
