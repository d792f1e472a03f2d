//! The RSA-OAEP variant.

use serde::{Deserialize, Serialize};

use super::{base64_decode, base64_encode, key_mismatch};
use crate::crypto::oaep;
use crate::crypto::{KeyMaterial, KeyType, KeyWithType};
use crate::errors::{EcvError, Result};
use crate::value::AlgorithmType;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RsaMode {
    #[default]
    #[serde(rename = "OAEP")]
    Oaep,
}

/// Digest used for OAEP and MGF1. Only SHA-256 is supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HashAlgorithm {
    #[default]
    #[serde(rename = "SHA-256")]
    Sha256,
}

/// A value encrypted with RSA-OAEP.
///
/// ```text
/// {"type":"RSA","mode":"OAEP","ciphertext":"<b64>","oaep-alg":"SHA-256","mdf1-alg":"SHA-256"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsaOaepValue {
    #[serde(default)]
    pub mode: RsaMode,

    #[serde(serialize_with = "base64_encode", deserialize_with = "base64_decode")]
    pub ciphertext: Vec<u8>,

    #[serde(rename = "oaep-alg", default)]
    pub oaep_alg: HashAlgorithm,

    // "mdf1" is the established wire spelling of the MGF1 digest field.
    #[serde(rename = "mdf1-alg", default)]
    pub mgf1_alg: HashAlgorithm,
}

impl RsaOaepValue {
    pub fn new(ciphertext: Vec<u8>) -> Self {
        Self {
            mode: RsaMode::Oaep,
            ciphertext,
            oaep_alg: HashAlgorithm::Sha256,
            mgf1_alg: HashAlgorithm::Sha256,
        }
    }

    pub(crate) fn decrypt(&self, key: &KeyWithType) -> Result<Vec<u8>> {
        match key.material() {
            KeyMaterial::RsaPrivate(private_key) => oaep::decrypt(private_key, &self.ciphertext),
            KeyMaterial::RsaPublic(_) => Err(EcvError::WrongKeyRole(
                KeyType::RsaPublic.to_string(),
                "decryption",
            )),
            KeyMaterial::Aes(_) => Err(key_mismatch(AlgorithmType::Rsa, key)),
        }
    }
}
