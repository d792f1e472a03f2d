//! The write path: turn plaintext into an [`EncryptedValue`].
//!
//! The key decides the algorithm. `AES` keys produce AES-GCM values
//! with a fresh random IV; `RSA-PUB` keys produce RSA-OAEP values.

use crate::crypto::{gcm, oaep};
use crate::crypto::{KeyMaterial, KeyType, KeyWithType};
use crate::errors::{EcvError, Result};
use crate::value::{AesGcmValue, EncryptedValue, RsaOaepValue};

/// Encrypt `plaintext` with `key`.
pub fn encrypt(key: &KeyWithType, plaintext: &str) -> Result<EncryptedValue> {
    match key.material() {
        KeyMaterial::Aes(aes_key) => {
            let sealed = gcm::encrypt(aes_key.as_bytes(), plaintext.as_bytes())?;
            Ok(EncryptedValue::Aes(AesGcmValue::new(
                sealed.iv,
                sealed.ciphertext,
                sealed.tag,
            )))
        }
        KeyMaterial::RsaPublic(public_key) => {
            let ciphertext = oaep::encrypt(public_key, plaintext.as_bytes())?;
            Ok(EncryptedValue::Rsa(RsaOaepValue::new(ciphertext)))
        }
        KeyMaterial::RsaPrivate(_) => Err(EcvError::WrongKeyRole(
            KeyType::RsaPrivate.to_string(),
            "encryption",
        )),
    }
}
