//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for a transfer run.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::ledger::types::Commitment;
use crate::wallet::{DerivationScheme, SecretPhrase};

/// Root configuration for one transfer.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct TransferConfig {
    /// Sender key material.
    pub wallet: WalletConfig,

    /// What to send and to whom.
    pub transfer: TransferTarget,

    /// Ledger RPC connection and confirmation settings.
    pub ledger: LedgerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Sender wallet configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct WalletConfig {
    /// BIP-39 phrase. Prefer `SOL_TRANSFER_MNEMONIC` over the config file.
    pub mnemonic: Option<SecretPhrase>,

    /// Optional BIP-39 passphrase ("25th word").
    pub passphrase: SecretPhrase,

    /// How the signing key is obtained from the phrase.
    pub derivation: DerivationScheme,
}

/// Transfer target.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct TransferTarget {
    /// Base58 recipient address.
    pub recipient: String,

    /// Amount in SOL; converted to lamports before use.
    pub amount_sol: f64,
}

/// Ledger integration configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Commitment level a transfer must reach to count as confirmed.
    pub commitment: Commitment,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,

    /// Upper bound on the confirmation wait in seconds.
    pub confirmation_timeout_secs: u64,

    /// Delay between signature status polls in milliseconds.
    pub poll_interval_ms: u64,

    /// Cluster name for explorer links (e.g. "devnet"); `None` disables links.
    pub cluster: Option<String>,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            rpc_url: "https://api.devnet.solana.com".to_string(),
            commitment: Commitment::Confirmed,
            rpc_timeout_secs: 30,
            confirmation_timeout_secs: 60,
            poll_interval_ms: 500,
            cluster: Some("devnet".to_string()),
        }
    }
}

impl LedgerConfig {
    /// Explorer URL for a transaction signature, if a cluster is configured.
    pub fn explorer_url(&self, signature: &str) -> Option<String> {
        self.cluster.as_ref().map(|cluster| {
            if cluster == "mainnet-beta" {
                format!("https://explorer.solana.com/tx/{}", signature)
            } else {
                format!(
                    "https://explorer.solana.com/tx/{}?cluster={}",
                    signature, cluster
                )
            }
        })
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Print human-readable progress lines to stdout.
    pub progress: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            progress: true,
        }
    }
}
