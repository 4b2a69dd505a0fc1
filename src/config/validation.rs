//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (amount > 0, timeouts > 0)
//! - Check that addresses and URLs parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: TransferConfig → Result<(), Vec<ValidationError>>
//! - Runs before any key derivation or network call

use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;
use thiserror::Error;

use crate::config::schema::TransferConfig;
use crate::ledger::types::sol_to_lamports;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no mnemonic configured (set wallet.mnemonic or SOL_TRANSFER_MNEMONIC)")]
    MissingMnemonic,

    #[error("invalid recipient address '{0}'")]
    InvalidRecipient(String),

    #[error("amount must be a positive number of SOL of at least one lamport, got {0}")]
    InvalidAmount(String),

    #[error("invalid RPC URL '{0}': {1}")]
    InvalidRpcUrl(String, String),

    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &TransferConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match &config.wallet.mnemonic {
        Some(phrase) if !phrase.is_blank() => {}
        _ => errors.push(ValidationError::MissingMnemonic),
    }

    if let Err(e) = parse_recipient(&config.transfer.recipient) {
        errors.push(e);
    }

    if sol_to_lamports(config.transfer.amount_sol).is_none() {
        errors.push(ValidationError::InvalidAmount(
            config.transfer.amount_sol.to_string(),
        ));
    }

    match url::Url::parse(&config.ledger.rpc_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(ValidationError::InvalidRpcUrl(
            config.ledger.rpc_url.clone(),
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Err(e) => errors.push(ValidationError::InvalidRpcUrl(
            config.ledger.rpc_url.clone(),
            e.to_string(),
        )),
    }

    if config.ledger.rpc_timeout_secs == 0 {
        errors.push(ValidationError::ZeroDuration("ledger.rpc_timeout_secs"));
    }
    if config.ledger.confirmation_timeout_secs == 0 {
        errors.push(ValidationError::ZeroDuration("ledger.confirmation_timeout_secs"));
    }
    if config.ledger.poll_interval_ms == 0 {
        errors.push(ValidationError::ZeroDuration("ledger.poll_interval_ms"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Parse a base58 recipient address.
pub fn parse_recipient(recipient: &str) -> Result<Pubkey, ValidationError> {
    Pubkey::from_str(recipient.trim())
        .map_err(|_| ValidationError::InvalidRecipient(recipient.to_string()))
}
