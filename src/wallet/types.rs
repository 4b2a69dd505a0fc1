//! Wallet error definitions and derivation scheme selection.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Solana's registered BIP-44 coin type.
pub const SOLANA_COIN_TYPE: u32 = 501;

/// BIP-44 purpose index.
pub const BIP44_PURPOSE: u32 = 44;

/// Errors raised while turning a mnemonic into a keypair.
#[derive(Debug, Error)]
pub enum WalletError {
    /// Phrase has the wrong word count, an unknown word or a bad checksum.
    #[error("Invalid mnemonic phrase: {0}")]
    InvalidMnemonic(String),

    /// Key material could not be turned into a keypair.
    #[error("Key derivation failed: {0}")]
    Derivation(String),
}

/// Result type for wallet operations.
pub type WalletResult<T> = Result<T, WalletError>;

/// How the 32-byte ed25519 secret is obtained from the phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(tag = "scheme", rename_all = "kebab-case")]
pub enum DerivationScheme {
    /// First 32 bytes of the 64-byte BIP-39 seed.
    ///
    /// Not portable: wallets following BIP-44 derive a different address
    /// from the same phrase.
    #[default]
    SeedPrefix,

    /// BIP-44 path `m/44'/501'/{account}'/{change}'` (SLIP-10, all hardened).
    Bip44 {
        #[serde(default)]
        account: u32,
        #[serde(default = "default_change")]
        change: Option<u32>,
    },

    /// SHA-256 of the phrase text, as produced by older tooling.
    PhraseSha256,
}

fn default_change() -> Option<u32> {
    Some(0)
}

impl DerivationScheme {
    /// Standard BIP-44 scheme for the given account.
    pub fn bip44(account: u32) -> Self {
        Self::Bip44 {
            account,
            change: default_change(),
        }
    }

    /// Hardened path indices for BIP-44, `None` for other schemes.
    pub fn path(&self) -> Option<Vec<u32>> {
        match self {
            Self::Bip44 { account, change } => {
                let mut path = vec![BIP44_PURPOSE, SOLANA_COIN_TYPE, *account];
                path.extend(change.iter().copied());
                Some(path)
            }
            _ => None,
        }
    }

    /// Path rendered as `m/44'/501'/0'/0'`, `None` for other schemes.
    pub fn path_string(&self) -> Option<String> {
        self.path().map(|path| {
            path.iter().fold(String::from("m"), |mut out, index| {
                out.push_str(&format!("/{}'", index));
                out
            })
        })
    }

    /// Short name used in logs and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SeedPrefix => "seed-prefix",
            Self::Bip44 { .. } => "bip44",
            Self::PhraseSha256 => "phrase-sha256",
        }
    }
}
