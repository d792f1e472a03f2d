//! Integration tests for decryption across algorithms, keys and formats.

mod common;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use encrypted_config_value::crypto::{gcm, oaep, KeyMaterial, KeyType, KeyWithType};
use encrypted_config_value::encrypter::encrypt;
use encrypted_config_value::{decode, AlgorithmType, EcvError, EncryptedValue};

// ---------------------------------------------------------------------------
// RSA-OAEP
// ---------------------------------------------------------------------------

#[test]
fn rsa_encrypt_decrypt_through_envelope() {
    let value = encrypt(common::rsa_public_key(), "API_TOKEN=abc123").expect("encrypt");
    assert_eq!(value.algorithm(), Some(AlgorithmType::Rsa));

    let decoded = decode(&value.to_serializable().unwrap()).unwrap();
    assert_eq!(
        decoded.decrypt(common::rsa_private_key()).unwrap(),
        "API_TOKEN=abc123"
    );
}

#[test]
fn rsa_public_key_cannot_decrypt() {
    let value = encrypt(common::rsa_public_key(), "x").unwrap();
    assert!(matches!(
        value.decrypt(common::rsa_public_key()),
        Err(EcvError::WrongKeyRole(_, _))
    ));
}

#[test]
fn rsa_private_key_cannot_encrypt() {
    assert!(matches!(
        encrypt(common::rsa_private_key(), "x"),
        Err(EcvError::WrongKeyRole(_, _))
    ));
}

#[test]
fn tampered_rsa_ciphertext_fails() {
    let mut value = encrypt(common::rsa_public_key(), "hello").unwrap();
    if let EncryptedValue::Rsa(ref mut rsa) = value {
        rsa.ciphertext[10] ^= 0xFF;
    }

    assert!(matches!(
        value.decrypt(common::rsa_private_key()),
        Err(EcvError::DecryptionFailure(_))
    ));
}

// ---------------------------------------------------------------------------
// AES-GCM
// ---------------------------------------------------------------------------

#[test]
fn tampered_aes_tag_fails() {
    let key = KeyWithType::aes(&[0x10u8; 32]).unwrap();
    let mut value = encrypt(&key, "hello").unwrap();
    if let EncryptedValue::Aes(ref mut aes) = value {
        aes.tag[0] ^= 0x01;
    }

    assert!(matches!(
        value.decrypt(&key),
        Err(EcvError::DecryptionFailure(_))
    ));
}

#[test]
fn aes128_key_works_end_to_end() {
    let key = KeyWithType::aes(&[0x44u8; 16]).unwrap();
    let value = encrypt(&key, "short key").unwrap();
    assert_eq!(decode(&value.to_string()).unwrap().decrypt(&key).unwrap(), "short key");
}

// ---------------------------------------------------------------------------
// Legacy values
// ---------------------------------------------------------------------------

#[test]
fn legacy_aes_value_decrypts() {
    let raw_key = [0x29u8; 32];
    let combined = gcm::encrypt(&raw_key, b"from before tagging")
        .unwrap()
        .into_combined();
    let envelope = format!("enc:{}", BASE64.encode(&combined));

    let value = decode(&envelope).unwrap();
    assert!(value.is_legacy());

    let key = KeyWithType::aes(&raw_key).unwrap();
    assert_eq!(value.decrypt(&key).unwrap(), "from before tagging");
}

#[test]
fn legacy_rsa_value_decrypts() {
    let KeyMaterial::RsaPublic(public) = common::rsa_public_key().material() else {
        panic!("fixture should be an RSA public key");
    };
    let ciphertext = oaep::encrypt(public, b"legacy rsa").unwrap();
    let envelope = format!("enc:{}", BASE64.encode(&ciphertext));

    let value = decode(&envelope).unwrap();
    assert!(value.is_legacy());
    assert_eq!(
        value.decrypt(common::rsa_private_key()).unwrap(),
        "legacy rsa"
    );
}

#[test]
fn legacy_value_with_public_key_is_wrong_role() {
    let value = decode("enc:gICAgICAgICAgICA").unwrap();
    assert!(matches!(
        value.decrypt(common::rsa_public_key()),
        Err(EcvError::WrongKeyRole(_, _))
    ));
}

// ---------------------------------------------------------------------------
// Key text form
// ---------------------------------------------------------------------------

#[test]
fn rsa_keys_roundtrip_through_text_form() {
    for key in [common::rsa_public_key(), common::rsa_private_key()] {
        let text = key.to_serializable().unwrap();
        let parsed: KeyWithType = text.parse().unwrap();
        assert_eq!(parsed.key_type(), key.key_type());
        assert_eq!(parsed.to_serializable().unwrap().as_str(), text.as_str());
    }
}

#[test]
fn parsed_private_key_decrypts() {
    let text = common::rsa_private_key().to_serializable().unwrap();
    let parsed: KeyWithType = text.parse().unwrap();
    assert_eq!(parsed.key_type(), KeyType::RsaPrivate);

    let value = encrypt(common::rsa_public_key(), "via parsed key").unwrap();
    assert_eq!(value.decrypt(&parsed).unwrap(), "via parsed key");
}

#[test]
fn key_file_is_read_and_trimmed() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("ecv.key");
    std::fs::write(&path, format!("AES:{}\n", BASE64.encode([0x55u8; 32]))).unwrap();

    let key = KeyWithType::from_path(&path).unwrap();
    assert_eq!(key.key_type(), KeyType::Aes);
}

#[test]
fn missing_key_file_is_invalid_key() {
    let tmp = tempfile::TempDir::new().unwrap();
    assert!(matches!(
        KeyWithType::from_path(&tmp.path().join("nope")),
        Err(EcvError::InvalidKey(_))
    ));
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[test]
fn values_and_keys_are_shareable_across_threads() {
    let key = KeyWithType::aes(&[0x61u8; 32]).unwrap();
    let envelope = encrypt(&key, "shared").unwrap().to_serializable().unwrap();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let value = decode(&envelope).unwrap();
                assert_eq!(value.decrypt(&key).unwrap(), "shared");
            });
        }
    });
}
