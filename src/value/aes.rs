//! The AES-GCM variant.

use serde::{Deserialize, Serialize};

use super::{base64_decode, base64_encode, key_mismatch};
use crate::crypto::gcm;
use crate::crypto::{KeyMaterial, KeyWithType};
use crate::errors::Result;
use crate::value::AlgorithmType;

/// Block cipher mode. GCM is the only one defined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AesMode {
    #[default]
    #[serde(rename = "GCM")]
    Gcm,
}

/// A value encrypted with AES-GCM.
///
/// JSON shape (the `type` field is added by the envelope codec):
///
/// ```text
/// {"type":"AES","mode":"GCM","ciphertext":"<b64>","iv":"<b64>","tag":"<b64>"}
/// ```
///
/// When `tag` is absent or empty, the auth tag is expected at the end of
/// `ciphertext`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AesGcmValue {
    #[serde(default)]
    pub mode: AesMode,

    #[serde(serialize_with = "base64_encode", deserialize_with = "base64_decode")]
    pub ciphertext: Vec<u8>,

    #[serde(serialize_with = "base64_encode", deserialize_with = "base64_decode")]
    pub iv: Vec<u8>,

    #[serde(
        default,
        serialize_with = "base64_encode",
        deserialize_with = "base64_decode"
    )]
    pub tag: Vec<u8>,
}

impl AesGcmValue {
    pub fn new(iv: Vec<u8>, ciphertext: Vec<u8>, tag: Vec<u8>) -> Self {
        Self {
            mode: AesMode::Gcm,
            ciphertext,
            iv,
            tag,
        }
    }

    pub(crate) fn decrypt(&self, key: &KeyWithType) -> Result<Vec<u8>> {
        let KeyMaterial::Aes(aes_key) = key.material() else {
            return Err(key_mismatch(AlgorithmType::Aes, key));
        };

        let mut sealed = Vec::with_capacity(self.ciphertext.len() + self.tag.len());
        sealed.extend_from_slice(&self.ciphertext);
        sealed.extend_from_slice(&self.tag);

        gcm::decrypt(aes_key.as_bytes(), &self.iv, &sealed)
    }
}
