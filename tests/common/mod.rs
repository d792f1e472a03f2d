//! Shared fixtures for integration tests.

use std::sync::OnceLock;

use aes_gcm::aead::OsRng;
use encrypted_config_value::crypto::KeyWithType;
use rsa::RsaPrivateKey;

// Small keys keep debug-build keygen fast; OAEP-SHA256 still fits 62-byte messages.
const TEST_RSA_BITS: usize = 1024;

fn rsa_pair() -> &'static (KeyWithType, KeyWithType) {
    static PAIR: OnceLock<(KeyWithType, KeyWithType)> = OnceLock::new();
    PAIR.get_or_init(|| {
        let private = RsaPrivateKey::new(&mut OsRng, TEST_RSA_BITS).expect("generate RSA key");
        let public = private.to_public_key();
        (
            KeyWithType::rsa_public(public),
            KeyWithType::rsa_private(private),
        )
    })
}

#[allow(dead_code)]
pub fn rsa_public_key() -> &'static KeyWithType {
    &rsa_pair().0
}

#[allow(dead_code)]
pub fn rsa_private_key() -> &'static KeyWithType {
    &rsa_pair().1
}
