//! Typed key material.
//!
//! A key is serialized as `<KEY-TYPE>:<base64 key bytes>`:
//!
//! | Key type   | Bytes                               |
//! |------------|-------------------------------------|
//! | `AES`      | raw 16- or 32-byte AES key          |
//! | `RSA-PUB`  | DER SubjectPublicKeyInfo            |
//! | `RSA-PRIV` | DER PKCS#8 private key              |
//!
//! The key type tells the encrypted value which algorithm the key is
//! valid for and whether it may be used to decrypt.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use rsa::{RsaPrivateKey, RsaPublicKey};
use zeroize::{Zeroize, Zeroizing};

use crate::errors::{EcvError, Result};
use crate::value::AlgorithmType;

// ---------------------------------------------------------------------------
// KeyType
// ---------------------------------------------------------------------------

/// The algorithm and role a key is valid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    Aes,
    RsaPublic,
    RsaPrivate,
}

impl KeyType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aes => "AES",
            Self::RsaPublic => "RSA-PUB",
            Self::RsaPrivate => "RSA-PRIV",
        }
    }

    /// The encryption algorithm this key belongs to.
    pub fn algorithm(self) -> AlgorithmType {
        match self {
            Self::Aes => AlgorithmType::Aes,
            Self::RsaPublic | Self::RsaPrivate => AlgorithmType::Rsa,
        }
    }

    pub fn can_encrypt(self) -> bool {
        matches!(self, Self::Aes | Self::RsaPublic)
    }

    pub fn can_decrypt(self) -> bool {
        matches!(self, Self::Aes | Self::RsaPrivate)
    }
}

impl FromStr for KeyType {
    type Err = EcvError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "AES" => Ok(Self::Aes),
            "RSA-PUB" => Ok(Self::RsaPublic),
            "RSA-PRIV" => Ok(Self::RsaPrivate),
            other => Err(EcvError::InvalidKey(format!(
                "unknown key type '{other}' — expected AES, RSA-PUB or RSA-PRIV"
            ))),
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Key material
// ---------------------------------------------------------------------------

/// Raw AES key bytes, wiped from memory on drop.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct AesKey {
    bytes: Vec<u8>,
}

impl AesKey {
    /// Wrap raw key bytes. Only 128- and 256-bit keys are accepted.
    pub fn new(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 16 && bytes.len() != 32 {
            return Err(EcvError::InvalidKey(format!(
                "AES key must be 16 or 32 bytes, got {}",
                bytes.len()
            )));
        }
        Ok(Self {
            bytes: bytes.to_vec(),
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// The parsed key behind a [`KeyWithType`].
#[derive(Clone)]
pub enum KeyMaterial {
    Aes(AesKey),
    RsaPublic(RsaPublicKey),
    RsaPrivate(RsaPrivateKey),
}

// ---------------------------------------------------------------------------
// KeyWithType
// ---------------------------------------------------------------------------

/// Key material tagged with the algorithm and role it is valid for.
///
/// Encrypted values never look inside a key beyond its [`KeyType`];
/// they hand the material to the matching primitive.
#[derive(Clone)]
pub struct KeyWithType {
    material: KeyMaterial,
}

impl KeyWithType {
    pub fn aes(bytes: &[u8]) -> Result<Self> {
        Ok(Self {
            material: KeyMaterial::Aes(AesKey::new(bytes)?),
        })
    }

    pub fn rsa_public(key: RsaPublicKey) -> Self {
        Self {
            material: KeyMaterial::RsaPublic(key),
        }
    }

    pub fn rsa_private(key: RsaPrivateKey) -> Self {
        Self {
            material: KeyMaterial::RsaPrivate(key),
        }
    }

    /// Read a key from a file holding its `<TYPE>:<base64>` form.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(EcvError::InvalidKey(format!(
                "key file not found at {}",
                path.display()
            )));
        }

        let contents = Zeroizing::new(std::fs::read_to_string(path)?);
        contents.trim().parse()
    }

    pub fn key_type(&self) -> KeyType {
        match self.material {
            KeyMaterial::Aes(_) => KeyType::Aes,
            KeyMaterial::RsaPublic(_) => KeyType::RsaPublic,
            KeyMaterial::RsaPrivate(_) => KeyType::RsaPrivate,
        }
    }

    pub fn algorithm(&self) -> AlgorithmType {
        self.key_type().algorithm()
    }

    pub fn material(&self) -> &KeyMaterial {
        &self.material
    }

    /// Serialize to `<TYPE>:<base64>`.
    ///
    /// Returned in a `Zeroizing` wrapper because the string contains
    /// the secret key for `AES` and `RSA-PRIV` keys.
    pub fn to_serializable(&self) -> Result<Zeroizing<String>> {
        let encoded = match &self.material {
            KeyMaterial::Aes(k) => BASE64.encode(k.as_bytes()),
            KeyMaterial::RsaPublic(k) => {
                let der = k
                    .to_public_key_der()
                    .map_err(|e| EcvError::SerializationError(format!("RSA public key: {e}")))?;
                BASE64.encode(der.as_bytes())
            }
            KeyMaterial::RsaPrivate(k) => {
                let der = k
                    .to_pkcs8_der()
                    .map_err(|e| EcvError::SerializationError(format!("RSA private key: {e}")))?;
                BASE64.encode(der.as_bytes())
            }
        };
        Ok(Zeroizing::new(format!("{}:{encoded}", self.key_type())))
    }
}

impl FromStr for KeyWithType {
    type Err = EcvError;

    fn from_str(s: &str) -> Result<Self> {
        let (type_str, key_b64) = s.split_once(':').ok_or_else(|| {
            EcvError::InvalidKey("key must be of the form \"<TYPE>:<base64>\"".into())
        })?;

        let key_type: KeyType = type_str.parse()?;
        let bytes = Zeroizing::new(
            BASE64
                .decode(key_b64.trim())
                .map_err(|e| EcvError::InvalidKey(format!("key is not valid base64: {e}")))?,
        );

        match key_type {
            KeyType::Aes => Self::aes(&bytes),
            KeyType::RsaPublic => RsaPublicKey::from_public_key_der(&bytes)
                .map(Self::rsa_public)
                .map_err(|e| EcvError::InvalidKey(format!("RSA public key: {e}"))),
            KeyType::RsaPrivate => RsaPrivateKey::from_pkcs8_der(&bytes)
                .map(Self::rsa_private)
                .map_err(|e| EcvError::InvalidKey(format!("RSA private key: {e}"))),
        }
    }
}

// Never print key bytes.
impl fmt::Debug for KeyWithType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyWithType")
            .field("key_type", &self.key_type())
            .finish_non_exhaustive()
    }
}
