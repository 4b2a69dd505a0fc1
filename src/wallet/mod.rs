//! Wallet subsystem: mnemonic → signing keypair.
//!
//! # Data Flow
//! ```text
//! SecretPhrase (config file or SOL_TRANSFER_MNEMONIC)
//!     → deriver.rs (BIP-39 validation + seed)
//!     → scheme: seed prefix | BIP-44 path m/44'/501'/.. | SHA-256 of phrase
//!     → solana Keypair (held in memory for one run)
//! ```
//!
//! # Security Constraints
//! - Secrets never reach logs; only the public address is reported
//! - Seeds and derived nodes are zeroed after use

pub mod deriver;
pub mod secret;
pub mod types;

pub use deriver::{KeyDeriver, MnemonicKeyDeriver};
pub use secret::SecretPhrase;
pub use types::{DerivationScheme, WalletError, WalletResult};
