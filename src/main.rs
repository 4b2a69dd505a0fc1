//! sol-transfer
//!
//! Sends a single SOL transfer from a mnemonic-derived wallet and waits for
//! confirmation.
//!
//! # Flow
//!
//! ```text
//!   config file ─┐
//!   environment ─┼─▶ TransferConfig ─▶ validation
//!   CLI flags  ──┘                         │
//!                                          ▼
//!                                 ┌──────────────────┐
//!      MnemonicKeyDeriver ───────▶│ TransferWorkflow │◀─────── RpcLedgerClient
//!                                 └────────┬─────────┘          (JSON-RPC)
//!                                          │
//!      Ctrl-C / SIGTERM ─▶ Shutdown ───────┤
//!                                          ▼
//!                               TransferOutcome ─▶ stdout, exit code
//! ```
//!
//! Exit code is 0 when the transfer reached the configured commitment and 1
//! otherwise.

use clap::{Parser, ValueEnum};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use sol_transfer::config::{load_config, TransferConfig};
use sol_transfer::ledger::{Commitment, RpcLedgerClient};
use sol_transfer::lifecycle::signals::spawn_signal_listener;
use sol_transfer::lifecycle::Shutdown;
use sol_transfer::observability::init_logging;
use sol_transfer::transfer::TransferWorkflow;
use sol_transfer::wallet::{DerivationScheme, MnemonicKeyDeriver};

#[derive(Parser, Debug)]
#[command(name = "sol-transfer")]
#[command(
    about = "Send SOL from a mnemonic-derived wallet and wait for confirmation",
    long_about = None
)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Recipient address (base58).
    #[arg(short, long)]
    recipient: Option<String>,

    /// Amount in SOL.
    #[arg(short, long, allow_negative_numbers = true)]
    amount: Option<f64>,

    /// Ledger JSON-RPC endpoint.
    #[arg(long)]
    rpc_url: Option<String>,

    /// Key derivation scheme.
    #[arg(long, value_enum)]
    derivation: Option<SchemeArg>,

    /// BIP-44 account index (implies --derivation bip44 when set alone).
    #[arg(long)]
    account: Option<u32>,

    /// Commitment level to wait for (processed, confirmed, finalized).
    #[arg(long)]
    commitment: Option<Commitment>,

    /// Confirmation wait bound in seconds.
    #[arg(long)]
    confirmation_timeout: Option<u64>,

    /// Explorer cluster name for the transaction link.
    #[arg(long)]
    cluster: Option<String>,

    /// Print the outcome as JSON instead of progress lines.
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SchemeArg {
    SeedPrefix,
    Bip44,
    PhraseSha256,
}

impl Cli {
    /// Apply command-line overrides on top of file and environment values.
    fn apply(&self, config: &mut TransferConfig) {
        if let Some(recipient) = &self.recipient {
            config.transfer.recipient = recipient.clone();
        }
        if let Some(amount) = self.amount {
            config.transfer.amount_sol = amount;
        }
        if let Some(url) = &self.rpc_url {
            config.ledger.rpc_url = url.clone();
        }
        if let Some(commitment) = self.commitment {
            config.ledger.commitment = commitment;
        }
        if let Some(secs) = self.confirmation_timeout {
            config.ledger.confirmation_timeout_secs = secs;
        }
        if let Some(cluster) = &self.cluster {
            config.ledger.cluster = Some(cluster.clone());
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }
        if self.json {
            config.observability.progress = false;
        }

        let current_account = match config.wallet.derivation {
            DerivationScheme::Bip44 { account, .. } => account,
            _ => 0,
        };
        config.wallet.derivation = match (self.derivation, self.account) {
            (Some(SchemeArg::SeedPrefix), _) => DerivationScheme::SeedPrefix,
            (Some(SchemeArg::PhraseSha256), _) => DerivationScheme::PhraseSha256,
            (Some(SchemeArg::Bip44), account) => {
                DerivationScheme::bip44(account.unwrap_or(current_account))
            }
            (None, Some(account)) => match config.wallet.derivation {
                DerivationScheme::Bip44 { change, .. } => {
                    DerivationScheme::Bip44 { account, change }
                }
                _ => DerivationScheme::bip44(account),
            },
            (None, None) => config.wallet.derivation,
        };
    }
}

fn report_error(err: &dyn Error) {
    eprintln!("Error: {}", err);
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {}", cause);
        source = cause.source();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref(), |config| cli.apply(config)) {
        Ok(config) => config,
        Err(e) => {
            report_error(&e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.observability.log_level);

    tracing::info!(
        rpc_url = %config.ledger.rpc_url,
        recipient = %config.transfer.recipient,
        amount_sol = config.transfer.amount_sol,
        derivation = config.wallet.derivation.name(),
        commitment = ?config.ledger.commitment,
        "Configuration loaded"
    );

    let ledger = match RpcLedgerClient::new(config.ledger.clone()) {
        Ok(ledger) => ledger,
        Err(e) => {
            report_error(&e);
            return ExitCode::FAILURE;
        }
    };
    let deriver = MnemonicKeyDeriver::new(config.wallet.derivation);
    let workflow = TransferWorkflow::new(config, Arc::new(deriver), Arc::new(ledger));

    let shutdown = Shutdown::new();
    let listener = spawn_signal_listener(&shutdown);
    let outcome = workflow.run_until(shutdown.signalled()).await;
    listener.abort();

    if cli.json {
        match serde_json::to_string_pretty(&outcome) {
            Ok(json) => println!("{}", json),
            Err(e) => report_error(&e),
        }
    } else if let Some(message) = &outcome.message {
        eprintln!("Error: {}", message);
        for cause in &outcome.causes {
            eprintln!("  caused by: {}", cause);
        }
    }

    ExitCode::from(outcome.exit_code())
}
