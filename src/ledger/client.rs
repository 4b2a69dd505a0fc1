//! Ledger RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Define the narrow [`LedgerClient`] capability set used by the workflow
//! - Wrap the solana JSON-RPC client with per-call timeouts
//! - Classify transport failures into the ledger error taxonomy

use async_trait::async_trait;
use solana_client::client_error::{ClientError, ClientErrorKind};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_request::RpcError;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use std::future::Future;
use std::io::ErrorKind as IoErrorKind;
use std::time::Duration;
use tokio::time::timeout;

use crate::ledger::types::{
    Commitment, ConfirmationStatus, LedgerConfig, LedgerError, LedgerResult,
};

/// Remote ledger operations needed for one transfer.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Balance of `address` in lamports.
    async fn get_balance(&self, address: &Pubkey) -> LedgerResult<u64>;

    /// Latest blockhash to stamp the transaction with.
    async fn get_latest_blockhash(&self) -> LedgerResult<Hash>;

    /// Submit a signed transaction once. Never retried by the caller.
    async fn submit(&self, transaction: &Transaction) -> LedgerResult<Signature>;

    /// Poll the status of a submitted signature once.
    async fn confirm(&self, signature: &Signature) -> LedgerResult<ConfirmationStatus>;
}

/// JSON-RPC backed ledger client.
pub struct RpcLedgerClient {
    rpc: RpcClient,
    config: LedgerConfig,
    timeout_duration: Duration,
}

impl RpcLedgerClient {
    /// Create a new client. No request is sent until the first call.
    pub fn new(config: LedgerConfig) -> LedgerResult<Self> {
        let url: url::Url = config.rpc_url.parse().map_err(|e| {
            LedgerError::Unavailable(format!("Invalid RPC URL '{}': {}", config.rpc_url, e))
        })?;

        let timeout_duration = Duration::from_secs(config.rpc_timeout_secs);
        let rpc = RpcClient::new_with_timeout_and_commitment(
            url.to_string(),
            timeout_duration,
            config.commitment.to_config(),
        );

        tracing::info!(
            rpc_url = %config.rpc_url,
            commitment = ?config.commitment,
            "Ledger client initialized"
        );

        Ok(Self {
            rpc,
            config,
            timeout_duration,
        })
    }

    async fn call<T, F>(&self, op: &'static str, fut: F) -> LedgerResult<T>
    where
        F: Future<Output = Result<T, ClientError>> + Send,
    {
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                let err = classify_client_error(e);
                tracing::warn!(op, error = %err, "RPC error");
                Err(err)
            }
            Err(_) => {
                tracing::warn!(op, "RPC timeout");
                Err(LedgerError::Timeout(self.config.rpc_timeout_secs))
            }
        }
    }
}

#[async_trait]
impl LedgerClient for RpcLedgerClient {
    async fn get_balance(&self, address: &Pubkey) -> LedgerResult<u64> {
        self.call("get_balance", self.rpc.get_balance(address)).await
    }

    async fn get_latest_blockhash(&self) -> LedgerResult<Hash> {
        self.call("get_latest_blockhash", self.rpc.get_latest_blockhash())
            .await
    }

    async fn submit(&self, transaction: &Transaction) -> LedgerResult<Signature> {
        self.call("send_transaction", self.rpc.send_transaction(transaction))
            .await
    }

    async fn confirm(&self, signature: &Signature) -> LedgerResult<ConfirmationStatus> {
        let response = self
            .call(
                "get_signature_statuses",
                self.rpc.get_signature_statuses(std::slice::from_ref(signature)),
            )
            .await?;

        let status = match response.value.into_iter().next().flatten() {
            None => ConfirmationStatus::Pending,
            Some(status) => {
                if let Some(err) = &status.err {
                    ConfirmationStatus::Failed(err.to_string())
                } else if status.satisfies_commitment(Commitment::Finalized.to_config()) {
                    ConfirmationStatus::Finalized
                } else if status.satisfies_commitment(Commitment::Confirmed.to_config()) {
                    ConfirmationStatus::Confirmed
                } else {
                    ConfirmationStatus::Processed
                }
            }
        };
        Ok(status)
    }
}

impl std::fmt::Debug for RpcLedgerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcLedgerClient")
            .field("rpc_url", &self.config.rpc_url)
            .field("commitment", &self.config.commitment)
            .field("timeout_secs", &self.config.rpc_timeout_secs)
            .finish()
    }
}

/// Map a solana client error onto [`LedgerError`].
pub fn classify_client_error(err: ClientError) -> LedgerError {
    match err.kind() {
        ClientErrorKind::Io(io) => match io.kind() {
            IoErrorKind::ConnectionRefused
            | IoErrorKind::ConnectionReset
            | IoErrorKind::ConnectionAborted
            | IoErrorKind::NotConnected
            | IoErrorKind::AddrNotAvailable => LedgerError::Unavailable(io.to_string()),
            _ => LedgerError::Network(io.to_string()),
        },
        ClientErrorKind::Reqwest(e) if e.is_connect() => LedgerError::Unavailable(e.to_string()),
        ClientErrorKind::Reqwest(e) => LedgerError::Network(e.to_string()),
        ClientErrorKind::RpcError(RpcError::RpcResponseError { message, .. }) => {
            LedgerError::Rejected(message.clone())
        }
        ClientErrorKind::RpcError(RpcError::ForUser(message)) => {
            LedgerError::Rejected(message.clone())
        }
        ClientErrorKind::TransactionError(e) => LedgerError::Rejected(e.to_string()),
        _ => LedgerError::Network(err.to_string()),
    }
}
