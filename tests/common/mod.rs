//! Shared test doubles for workflow integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use sol_transfer::config::TransferConfig;
use sol_transfer::ledger::{
    Commitment, ConfirmationStatus, LedgerClient, LedgerError, LedgerResult,
};
use sol_transfer::lifecycle::Shutdown;
use sol_transfer::transfer::{ConfirmationPolicy, Progress, TransferWorkflow};
use sol_transfer::wallet::{
    KeyDeriver, MnemonicKeyDeriver, SecretPhrase, WalletError, WalletResult,
};
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::signer::keypair::keypair_from_seed;
use solana_sdk::transaction::Transaction;
use std::sync::Arc;

pub const PHRASE: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

pub const RECIPIENT: &str = "4JaZnV8M3iKSM7G9GmWowg1GFXyvk59ojo7VyEgZ49zL";

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// How the mock answers status polls.
#[derive(Debug, Clone)]
pub enum ConfirmBehavior {
    /// Report `Pending` for the first N polls, then `Finalized`.
    FinalizeAfter(u32),
    /// Always `Pending`.
    Never,
    /// Report an on-chain execution error.
    FailOnChain(String),
}

/// Scripted in-memory ledger.
pub struct MockLedger {
    balances: Mutex<HashMap<Pubkey, u64>>,
    after_submit: Mutex<HashMap<Pubkey, u64>>,
    submitted: Mutex<Vec<Signature>>,
    confirm: ConfirmBehavior,
    reject_submit: Option<String>,
    timeout_submit: bool,
    failing_blockhash: bool,
    unreachable: bool,
    balance_limit: Option<u32>,
    trigger_on_submit: Option<Shutdown>,
    pub balance_calls: AtomicU32,
    pub blockhash_calls: AtomicU32,
    pub submit_calls: AtomicU32,
    pub confirm_calls: AtomicU32,
}

impl MockLedger {
    pub fn new() -> Self {
        Self {
            balances: Mutex::new(HashMap::new()),
            after_submit: Mutex::new(HashMap::new()),
            submitted: Mutex::new(Vec::new()),
            confirm: ConfirmBehavior::FinalizeAfter(1),
            reject_submit: None,
            timeout_submit: false,
            failing_blockhash: false,
            unreachable: false,
            balance_limit: None,
            trigger_on_submit: None,
            balance_calls: AtomicU32::new(0),
            blockhash_calls: AtomicU32::new(0),
            submit_calls: AtomicU32::new(0),
            confirm_calls: AtomicU32::new(0),
        }
    }

    pub fn with_balance(self, address: Pubkey, lamports: u64) -> Self {
        self.balances.lock().unwrap().insert(address, lamports);
        self
    }

    /// Balance reported once a transaction has been submitted.
    pub fn with_balance_after_submit(self, address: Pubkey, lamports: u64) -> Self {
        self.after_submit.lock().unwrap().insert(address, lamports);
        self
    }

    pub fn with_confirm(mut self, behavior: ConfirmBehavior) -> Self {
        self.confirm = behavior;
        self
    }

    pub fn rejecting_submit(mut self, reason: &str) -> Self {
        self.reject_submit = Some(reason.to_string());
        self
    }

    /// Accept nothing and answer submissions with a transport timeout.
    pub fn timing_out_submit(mut self) -> Self {
        self.timeout_submit = true;
        self
    }

    pub fn failing_blockhash(mut self) -> Self {
        self.failing_blockhash = true;
        self
    }

    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    /// Fail every balance query after the first `n`.
    pub fn with_balance_limit(mut self, n: u32) -> Self {
        self.balance_limit = Some(n);
        self
    }

    pub fn triggering_on_submit(mut self, shutdown: Shutdown) -> Self {
        self.trigger_on_submit = Some(shutdown);
        self
    }

    pub fn submitted(&self) -> Vec<Signature> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn count(counter: &AtomicU32) -> u32 {
        counter.load(Ordering::SeqCst)
    }

    pub fn network_calls(&self) -> u32 {
        Self::count(&self.balance_calls)
            + Self::count(&self.blockhash_calls)
            + Self::count(&self.submit_calls)
            + Self::count(&self.confirm_calls)
    }
}

#[async_trait]
impl LedgerClient for MockLedger {
    async fn get_balance(&self, address: &Pubkey) -> LedgerResult<u64> {
        let call = self.balance_calls.fetch_add(1, Ordering::SeqCst);
        if self.unreachable {
            return Err(LedgerError::Unavailable("connection refused".to_string()));
        }
        if let Some(limit) = self.balance_limit {
            if call >= limit {
                return Err(LedgerError::Network("balance service down".to_string()));
            }
        }
        Ok(self.balances.lock().unwrap().get(address).copied().unwrap_or(0))
    }

    async fn get_latest_blockhash(&self) -> LedgerResult<Hash> {
        self.blockhash_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_blockhash {
            return Err(LedgerError::Network("blockhash unavailable".to_string()));
        }
        Ok(Hash::new_unique())
    }

    async fn submit(&self, transaction: &Transaction) -> LedgerResult<Signature> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(reason) = &self.reject_submit {
            return Err(LedgerError::Rejected(reason.clone()));
        }
        if self.timeout_submit {
            return Err(LedgerError::Timeout(30));
        }

        let signature = transaction.signatures[0];
        self.submitted.lock().unwrap().push(signature);

        let updates: Vec<_> = self.after_submit.lock().unwrap().drain().collect();
        self.balances.lock().unwrap().extend(updates);

        if let Some(shutdown) = &self.trigger_on_submit {
            shutdown.trigger();
        }
        Ok(signature)
    }

    async fn confirm(&self, _signature: &Signature) -> LedgerResult<ConfirmationStatus> {
        let call = self.confirm_calls.fetch_add(1, Ordering::SeqCst);
        Ok(match &self.confirm {
            ConfirmBehavior::FinalizeAfter(n) if call >= *n => ConfirmationStatus::Finalized,
            ConfirmBehavior::FinalizeAfter(_) | ConfirmBehavior::Never => {
                ConfirmationStatus::Pending
            }
            ConfirmBehavior::FailOnChain(reason) => ConfirmationStatus::Failed(reason.clone()),
        })
    }
}

/// Deriver returning the same keypair for any input.
pub struct FixedKeyDeriver {
    pub seed: [u8; 32],
}

impl KeyDeriver for FixedKeyDeriver {
    fn derive_keypair(
        &self,
        _phrase: &SecretPhrase,
        _passphrase: &SecretPhrase,
    ) -> WalletResult<Keypair> {
        keypair_from_seed(&self.seed).map_err(|e| WalletError::Derivation(e.to_string()))
    }
}

/// Address derived from [`PHRASE`] with the default scheme.
pub fn sender_address() -> Pubkey {
    MnemonicKeyDeriver::default()
        .derive_keypair(&SecretPhrase::new(PHRASE), &SecretPhrase::default())
        .unwrap()
        .pubkey()
}

pub fn recipient_address() -> Pubkey {
    RECIPIENT.parse().unwrap()
}

pub fn test_config(amount_sol: f64) -> TransferConfig {
    let mut config = TransferConfig::default();
    config.wallet.mnemonic = Some(SecretPhrase::new(PHRASE));
    config.transfer.recipient = RECIPIENT.to_string();
    config.transfer.amount_sol = amount_sol;
    config.observability.progress = false;
    config
}

pub fn fast_policy() -> ConfirmationPolicy {
    ConfirmationPolicy {
        commitment: Commitment::Confirmed,
        timeout: Duration::from_millis(200),
        poll_interval: Duration::from_millis(10),
    }
}

pub fn workflow(config: TransferConfig, ledger: Arc<MockLedger>) -> TransferWorkflow {
    TransferWorkflow::new(config, Arc::new(MnemonicKeyDeriver::default()), ledger)
        .with_confirmation_policy(fast_policy())
        .with_progress(Progress::silent())
}
