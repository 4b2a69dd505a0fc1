//! Secret string handling for mnemonic phrases and passphrases.
//!
//! # Security
//! - `Debug` and `Serialize` never emit the secret
//! - Memory is zeroed when the value is dropped

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

/// Placeholder written wherever a secret would otherwise appear.
const REDACTED: &str = "<redacted>";

/// A secret string (mnemonic phrase or passphrase).
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SecretPhrase(String);

impl SecretPhrase {
    /// Wrap a secret value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the secret. Callers must not log the returned value.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// True when the secret is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Number of whitespace-separated words, safe to log.
    pub fn word_count(&self) -> usize {
        self.0.split_whitespace().count()
    }
}

impl Drop for SecretPhrase {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl std::fmt::Debug for SecretPhrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(REDACTED)
    }
}

impl From<&str> for SecretPhrase {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SecretPhrase {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for SecretPhrase {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self)
    }
}

impl Serialize for SecretPhrase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(REDACTED)
    }
}
