//! AES-GCM authenticated encryption.
//!
//! Both AES-128 and AES-256 keys are accepted; the key length picks the
//! cipher. Every call to `encrypt` generates a fresh random 12-byte nonce.
//!
//! Modern values keep the three parts separately (`iv`, `ciphertext`,
//! `tag`). Legacy values store them as one buffer:
//!   [ 12-byte nonce | ciphertext | 16-byte auth tag ]

use aes_gcm::aead::consts::U12;
use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes128Gcm, Aes256Gcm, Nonce};

use crate::errors::{EcvError, Result};

/// Size of the AES-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Size of the AES-GCM authentication tag in bytes.
pub const TAG_LEN: usize = 16;

/// Output of [`encrypt`], with the auth tag split off the ciphertext.
#[derive(Debug, Clone)]
pub struct Sealed {
    pub iv: Vec<u8>,
    pub ciphertext: Vec<u8>,
    pub tag: Vec<u8>,
}

impl Sealed {
    /// Join the parts into the legacy single-buffer layout.
    pub fn into_combined(self) -> Vec<u8> {
        let mut out = self.iv;
        out.extend_from_slice(&self.ciphertext);
        out.extend_from_slice(&self.tag);
        out
    }
}

/// Encrypt `plaintext` with a 16- or 32-byte `key`.
pub fn encrypt(key: &[u8], plaintext: &[u8]) -> Result<Sealed> {
    let mut sealed = match key.len() {
        16 => seal::<Aes128Gcm>(key, plaintext)?,
        32 => seal::<Aes256Gcm>(key, plaintext)?,
        n => return Err(invalid_key_len(n)),
    };

    // aes-gcm appends the tag; split it back out.
    let tag_start = sealed.ciphertext.len() - TAG_LEN;
    sealed.tag = sealed.ciphertext.split_off(tag_start);
    Ok(sealed)
}

/// Decrypt `ciphertext_and_tag` using the given nonce.
///
/// The auth tag must be the trailing 16 bytes of `ciphertext_and_tag`.
pub fn decrypt(key: &[u8], iv: &[u8], ciphertext_and_tag: &[u8]) -> Result<Vec<u8>> {
    if iv.len() != NONCE_LEN {
        return Err(EcvError::DecryptionFailure(format!(
            "AES-GCM nonce must be {NONCE_LEN} bytes, got {}",
            iv.len()
        )));
    }
    if ciphertext_and_tag.len() < TAG_LEN {
        return Err(EcvError::DecryptionFailure(
            "AES-GCM ciphertext is shorter than the auth tag".into(),
        ));
    }

    match key.len() {
        16 => open::<Aes128Gcm>(key, iv, ciphertext_and_tag),
        32 => open::<Aes256Gcm>(key, iv, ciphertext_and_tag),
        n => Err(invalid_key_len(n)),
    }
}

/// Decrypt a buffer laid out as `nonce || ciphertext || tag`.
pub fn decrypt_combined(key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    if data.len() < NONCE_LEN + TAG_LEN {
        return Err(EcvError::DecryptionFailure(
            "AES-GCM payload too short".into(),
        ));
    }

    let (iv, ciphertext_and_tag) = data.split_at(NONCE_LEN);
    decrypt(key, iv, ciphertext_and_tag)
}

fn seal<C>(key: &[u8], plaintext: &[u8]) -> Result<Sealed>
where
    C: KeyInit + Aead + AeadCore<NonceSize = U12>,
{
    let cipher = C::new_from_slice(key)
        .map_err(|e| EcvError::EncryptionFailure(format!("invalid key length: {e}")))?;

    let nonce = C::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| EcvError::EncryptionFailure(format!("AES-GCM: {e}")))?;

    Ok(Sealed {
        iv: nonce.to_vec(),
        ciphertext,
        tag: Vec::new(),
    })
}

fn open<C>(key: &[u8], iv: &[u8], ciphertext_and_tag: &[u8]) -> Result<Vec<u8>>
where
    C: KeyInit + Aead + AeadCore<NonceSize = U12>,
{
    let cipher = C::new_from_slice(key)
        .map_err(|_| EcvError::DecryptionFailure("invalid AES key".into()))?;

    cipher
        .decrypt(Nonce::from_slice(iv), ciphertext_and_tag)
        .map_err(|_| {
            EcvError::DecryptionFailure("AES-GCM authentication failed — wrong key or corrupted data".into())
        })
}

fn invalid_key_len(n: usize) -> EcvError {
    EcvError::InvalidKey(format!("AES key must be 16 or 32 bytes, got {n}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encrypt_splits_tag() {
        let sealed = encrypt(&[0x42u8; 32], b"hello").unwrap();
        assert_eq!(sealed.iv.len(), NONCE_LEN);
        assert_eq!(sealed.tag.len(), TAG_LEN);
        assert_eq!(sealed.ciphertext.len(), 5);
    }

    #[test]
    fn aes128_roundtrip_through_combined_layout() {
        let key = [0x07u8; 16];
        let combined = encrypt(&key, b"short key").unwrap().into_combined();
        assert_eq!(decrypt_combined(&key, &combined).unwrap(), b"short key");
    }

    #[test]
    fn rejects_bad_key_length() {
        assert!(matches!(
            encrypt(&[0u8; 24], b"x"),
            Err(EcvError::InvalidKey(_))
        ));
    }

    #[test]
    fn rejects_bad_nonce_length() {
        let err = decrypt(&[0u8; 32], &[0u8; 8], &[0u8; 32]).unwrap_err();
        assert!(matches!(err, EcvError::DecryptionFailure(_)));
    }

    #[test]
    fn truncated_combined_payload_fails() {
        assert!(decrypt_combined(&[0u8; 32], &[0u8; 20]).is_err());
    }
}
