//! Keypair derivation from a BIP-39 mnemonic.
//!
//! # Security
//! - The phrase and passphrase only travel as [`SecretPhrase`]
//! - Seeds and intermediate keys are never logged
//! - Only the derived public address is reported

use bip39::{Language, Mnemonic};
use sha2::{Digest, Sha256};
use solana_sdk::derivation_path::DerivationPath;
use solana_sdk::signature::{Keypair, Signer};
use solana_sdk::signer::keypair::{keypair_from_seed, keypair_from_seed_and_derivation_path};
use zeroize::Zeroize;

use crate::wallet::secret::SecretPhrase;
use crate::wallet::types::{DerivationScheme, WalletError, WalletResult};

/// Turns a mnemonic phrase and passphrase into a signing keypair.
pub trait KeyDeriver: Send + Sync {
    /// Derive the keypair. Fails if the phrase is not valid BIP-39.
    fn derive_keypair(
        &self,
        phrase: &SecretPhrase,
        passphrase: &SecretPhrase,
    ) -> WalletResult<Keypair>;
}

/// BIP-39 backed deriver with a configurable scheme.
#[derive(Debug, Clone, Default)]
pub struct MnemonicKeyDeriver {
    scheme: DerivationScheme,
}

impl MnemonicKeyDeriver {
    /// Create a deriver for the given scheme.
    pub fn new(scheme: DerivationScheme) -> Self {
        Self { scheme }
    }

}

impl KeyDeriver for MnemonicKeyDeriver {
    fn derive_keypair(
        &self,
        phrase: &SecretPhrase,
        passphrase: &SecretPhrase,
    ) -> WalletResult<Keypair> {
        let mnemonic = parse_mnemonic(phrase)?;

        let keypair = match self.scheme {
            DerivationScheme::SeedPrefix => {
                let mut seed = mnemonic.to_seed(passphrase.expose());
                let keypair = keypair_from_secret(&seed[..32]);
                seed.zeroize();
                keypair?
            }
            DerivationScheme::Bip44 { account, change } => {
                let path = DerivationPath::new_bip44(Some(account), change);
                let mut seed = mnemonic.to_seed(passphrase.expose());
                let keypair =
                    keypair_from_seed_and_derivation_path(&seed, Some(path)).map_err(|e| {
                        WalletError::Derivation(format!("BIP-44 derivation failed: {}", e))
                    });
                seed.zeroize();
                tracing::debug!(path = ?self.scheme.path_string(), "Derived BIP-44 key");
                keypair?
            }
            DerivationScheme::PhraseSha256 => {
                let mut digest: [u8; 32] = Sha256::digest(phrase.expose().as_bytes()).into();
                let keypair = keypair_from_secret(&digest);
                digest.zeroize();
                keypair?
            }
        };

        tracing::info!(
            address = %keypair.pubkey(),
            scheme = self.scheme.name(),
            "Keypair derived"
        );

        Ok(keypair)
    }
}

/// Validate word count, vocabulary and checksum.
pub fn parse_mnemonic(phrase: &SecretPhrase) -> WalletResult<Mnemonic> {
    if phrase.is_blank() {
        return Err(WalletError::InvalidMnemonic("phrase is empty".to_string()));
    }
    Mnemonic::parse_in(Language::English, phrase.expose())
        .map_err(|e| WalletError::InvalidMnemonic(e.to_string()))
}

fn keypair_from_secret(secret: &[u8]) -> WalletResult<Keypair> {
    keypair_from_seed(secret)
        .map_err(|e| WalletError::Derivation(format!("Invalid key material: {}", e)))
}
