//! RSA-OAEP encryption with SHA-256 as both the OAEP digest and the
//! MGF1 digest.

use aes_gcm::aead::OsRng;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;

use crate::errors::{EcvError, Result};

/// Encrypt `plaintext` for the holder of the matching private key.
pub fn encrypt(key: &RsaPublicKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    key.encrypt(&mut OsRng, Oaep::new::<Sha256>(), plaintext)
        .map_err(|e| EcvError::EncryptionFailure(format!("RSA-OAEP: {e}")))
}

/// Decrypt an RSA-OAEP ciphertext.
pub fn decrypt(key: &RsaPrivateKey, ciphertext: &[u8]) -> Result<Vec<u8>> {
    key.decrypt(Oaep::new::<Sha256>(), ciphertext)
        .map_err(|_| EcvError::DecryptionFailure("RSA-OAEP decryption rejected the ciphertext".into()))
}
