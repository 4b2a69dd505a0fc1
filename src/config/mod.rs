//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → environment (SOL_TRANSFER_MNEMONIC, SOL_TRANSFER_PASSPHRASE)
//!     → command-line overrides (main.rs)
//!     → validation.rs (semantic checks)
//!     → TransferConfig (validated, immutable for the run)
//! ```
//!
//! # Design Decisions
//! - Secrets never live in source; they come from the file or environment
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::LedgerConfig;
pub use schema::ObservabilityConfig;
pub use schema::TransferConfig;
pub use schema::TransferTarget;
pub use schema::WalletConfig;
pub use validation::{validate_config, ValidationError};
