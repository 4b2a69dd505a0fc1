//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::TransferConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::wallet::SecretPhrase;

/// Environment variable holding the mnemonic phrase.
pub const MNEMONIC_ENV_VAR: &str = "SOL_TRANSFER_MNEMONIC";

/// Environment variable holding the BIP-39 passphrase.
pub const PASSPHRASE_ENV_VAR: &str = "SOL_TRANSFER_PASSPHRASE";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Validation(_) => None,
        }
    }
}

/// Parse a TOML file without validating it.
pub fn read_config(path: &Path) -> Result<TransferConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Build the run configuration: defaults or `path`, then environment
/// secrets, then `overrides` (command-line flags), then validation.
pub fn load_config<F>(path: Option<&Path>, overrides: F) -> Result<TransferConfig, ConfigError>
where
    F: FnOnce(&mut TransferConfig),
{
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => TransferConfig::default(),
    };
    apply_env(&mut config);
    overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Override secrets from the process environment.
pub fn apply_env(config: &mut TransferConfig) {
    apply_env_from(config, |key| std::env::var(key).ok());
}

/// Override secrets using an arbitrary lookup (testable without touching
/// the process environment).
pub fn apply_env_from<F>(config: &mut TransferConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(phrase) = lookup(MNEMONIC_ENV_VAR).filter(|p| !p.trim().is_empty()) {
        tracing::debug!(source = MNEMONIC_ENV_VAR, "Mnemonic taken from environment");
        config.wallet.mnemonic = Some(SecretPhrase::from(phrase));
    }
    if let Some(passphrase) = lookup(PASSPHRASE_ENV_VAR) {
        config.wallet.passphrase = SecretPhrase::from(passphrase);
    }
}
