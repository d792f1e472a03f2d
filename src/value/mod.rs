//! Encrypted values and the variants behind them.
//!
//! This module provides:
//! - The `AlgorithmType` tag (`algorithm`)
//! - One variant per algorithm (`aes`, `rsa`) plus the untagged `legacy` one
//! - `EncryptedValue`, the closed set of variants callers hold

pub mod aes;
pub mod algorithm;
pub mod legacy;
pub mod rsa;

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Deserialize;

pub use self::aes::{AesGcmValue, AesMode};
pub use self::algorithm::AlgorithmType;
pub use self::legacy::LegacyValue;
pub use self::rsa::{HashAlgorithm, RsaMode, RsaOaepValue};

use crate::crypto::KeyWithType;
use crate::envelope;
use crate::errors::{EcvError, Result};

/// A decoded encrypted value.
///
/// Construct one by parsing an `enc:` envelope (`"enc:...".parse()`),
/// or through [`crate::encrypter::encrypt`]. Values are immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncryptedValue {
    Aes(AesGcmValue),
    Rsa(RsaOaepValue),
    /// Pre-tagged format: raw ciphertext with no algorithm metadata.
    Legacy(LegacyValue),
}

impl EncryptedValue {
    /// The algorithm tag, or `None` for legacy values.
    pub fn algorithm(&self) -> Option<AlgorithmType> {
        match self {
            Self::Aes(_) => Some(AlgorithmType::Aes),
            Self::Rsa(_) => Some(AlgorithmType::Rsa),
            Self::Legacy(_) => None,
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::Legacy(_))
    }

    /// Decrypt this value with `key` and return the plaintext.
    ///
    /// Tagged values check the key's algorithm before touching the
    /// ciphertext and fail with `KeyAlgorithmMismatch` if it differs.
    /// Legacy values let the key type pick the primitive.
    pub fn decrypt(&self, key: &KeyWithType) -> Result<String> {
        let plaintext = match self {
            Self::Aes(v) => v.decrypt(key)?,
            Self::Rsa(v) => v.decrypt(key)?,
            Self::Legacy(v) => v.decrypt(key)?,
        };

        String::from_utf8(plaintext)
            .map_err(|_| EcvError::DecryptionFailure("plaintext is not valid UTF-8".into()))
    }

    /// The `enc:<base64>` string for this value.
    ///
    /// Parsing the returned string yields a value equal to `self`.
    pub fn to_serializable(&self) -> Result<String> {
        envelope::encode(self)
    }
}

impl FromStr for EncryptedValue {
    type Err = EcvError;

    fn from_str(s: &str) -> Result<Self> {
        envelope::decode(s)
    }
}

impl fmt::Display for EncryptedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.to_serializable().map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

pub(crate) fn key_mismatch(expected: AlgorithmType, key: &KeyWithType) -> EcvError {
    EcvError::KeyAlgorithmMismatch {
        expected,
        actual: key.algorithm(),
    }
}

// ---------------------------------------------------------------------------
// Serde helpers for base64-encoded Vec<u8> fields
// ---------------------------------------------------------------------------

pub(crate) fn base64_encode<S>(data: &[u8], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let encoded = BASE64.encode(data);
    serializer.serialize_str(&encoded)
}

pub(crate) fn base64_decode<'de, D>(deserializer: D) -> std::result::Result<Vec<u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    BASE64.decode(&s).map_err(serde::de::Error::custom)
}
