//! One-shot SOL transfer from a mnemonic-derived wallet.

pub mod config;
pub mod ledger;
pub mod lifecycle;
pub mod observability;
pub mod transfer;
pub mod wallet;

pub use config::TransferConfig;
pub use ledger::{LedgerClient, RpcLedgerClient};
pub use lifecycle::Shutdown;
pub use transfer::{TransferOutcome, TransferWorkflow};
pub use wallet::{KeyDeriver, MnemonicKeyDeriver};
