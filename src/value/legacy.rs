//! Values written before payloads carried an algorithm tag.

use crate::crypto::{gcm, oaep};
use crate::crypto::{KeyMaterial, KeyType, KeyWithType};
use crate::errors::{EcvError, Result};

/// Raw ciphertext bytes exactly as they appeared in the envelope.
///
/// The algorithm is implied by the key used to decrypt:
/// - `AES` keys expect `nonce(12) || ciphertext || tag(16)`
/// - `RSA-PRIV` keys expect a bare RSA-OAEP (SHA-256) ciphertext
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyValue {
    encrypted_bytes: Vec<u8>,
}

impl LegacyValue {
    pub fn new(encrypted_bytes: Vec<u8>) -> Self {
        Self { encrypted_bytes }
    }

    pub fn encrypted_bytes(&self) -> &[u8] {
        &self.encrypted_bytes
    }

    pub(crate) fn decrypt(&self, key: &KeyWithType) -> Result<Vec<u8>> {
        match key.material() {
            KeyMaterial::Aes(aes_key) => gcm::decrypt_combined(aes_key.as_bytes(), &self.encrypted_bytes),
            KeyMaterial::RsaPrivate(private_key) => oaep::decrypt(private_key, &self.encrypted_bytes),
            KeyMaterial::RsaPublic(_) => Err(EcvError::WrongKeyRole(
                KeyType::RsaPublic.to_string(),
                "decryption",
            )),
        }
    }
}
