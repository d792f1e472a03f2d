//! The `enc:<base64>` envelope codec.
//!
//! An envelope string is `"enc:" + base64(payload)` where `payload` is
//! one of:
//!
//! - **modern**: a UTF-8 JSON object whose `type` field names the
//!   algorithm, e.g. `{"type":"AES","mode":"GCM",...}`
//! - **legacy**: raw ciphertext bytes with no metadata
//!
//! Decoding is two-phase. Any payload that parses as JSON is modern;
//! its `type` is read through a minimal struct first, then the full
//! document is parsed into the variant that tag selects.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::errors::{EcvError, Result};
use crate::value::{AesGcmValue, AlgorithmType, EncryptedValue, LegacyValue, RsaOaepValue};

/// Prefix every envelope string starts with.
pub const ENC_PREFIX: &str = "enc:";

/// Decode an envelope string into an [`EncryptedValue`].
pub fn decode(envelope: &str) -> Result<EncryptedValue> {
    let content_b64 = envelope
        .strip_prefix(ENC_PREFIX)
        .ok_or_else(|| EcvError::MalformedEnvelope(envelope.to_string()))?;

    let payload = BASE64
        .decode(content_b64)
        .map_err(|e| EcvError::InvalidEncoding(e.to_string()))?;

    if is_legacy_payload(&payload) {
        debug!(len = payload.len(), "payload is not JSON, decoding as legacy value");
        return Ok(EncryptedValue::Legacy(LegacyValue::new(payload)));
    }

    let algorithm = peek_algorithm(&payload)?;
    trace!(%algorithm, "dispatching on algorithm tag");
    dispatch(&algorithm, &payload)
}

/// Like [`decode`], but panics on malformed input.
///
/// Only for envelope strings known to be well-formed when the program
/// is written (constants, test fixtures). Never call this on values read
/// from files, environment variables, or user input.
pub fn decode_trusted(envelope: &str) -> EncryptedValue {
    match decode(envelope) {
        Ok(value) => value,
        Err(e) => panic!("invalid trusted encrypted value {envelope:?}: {e}"),
    }
}

/// Encode a value as an envelope string.
///
/// Legacy values have no JSON shape and are re-emitted as
/// `enc:<base64 raw bytes>`, which decodes back to the same legacy value.
pub fn encode(value: &EncryptedValue) -> Result<String> {
    let payload = match value {
        EncryptedValue::Aes(v) => serde_json::to_vec(&TaggedValue::Aes(v)),
        EncryptedValue::Rsa(v) => serde_json::to_vec(&TaggedValue::Rsa(v)),
        EncryptedValue::Legacy(v) => return Ok(wrap(v.encrypted_bytes())),
    }
    .map_err(|e| EcvError::SerializationError(e.to_string()))?;

    Ok(wrap(&payload))
}

/// True when `payload` does not parse as any JSON value.
///
/// Legacy ciphertext is effectively random and parses as JSON only with
/// negligible probability, so JSON-ness alone selects the modern path.
pub fn is_legacy_payload(payload: &[u8]) -> bool {
    serde_json::from_slice::<IgnoredAny>(payload).is_err()
}

/// Map an algorithm tag to the constructor of its variant.
///
/// Adding an algorithm means adding an `AlgorithmType` value and an arm
/// here.
pub(crate) fn dispatch(algorithm: &AlgorithmType, payload: &[u8]) -> Result<EncryptedValue> {
    match algorithm {
        AlgorithmType::Aes => parse_variant::<AesGcmValue>(algorithm, payload).map(EncryptedValue::Aes),
        AlgorithmType::Rsa => parse_variant::<RsaOaepValue>(algorithm, payload).map(EncryptedValue::Rsa),
        AlgorithmType::Unknown(tag) => Err(EcvError::UnknownAlgorithm(tag.clone())),
    }
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

/// Minimal shape exposing only the discriminant.
#[derive(Deserialize)]
struct Discriminant {
    #[serde(rename = "type")]
    algorithm: AlgorithmType,
}

/// Serialization view that writes the `type` field ahead of the variant's own fields.
#[derive(Serialize)]
#[serde(tag = "type")]
enum TaggedValue<'a> {
    #[serde(rename = "AES")]
    Aes(&'a AesGcmValue),
    #[serde(rename = "RSA")]
    Rsa(&'a RsaOaepValue),
}

fn peek_algorithm(payload: &[u8]) -> Result<AlgorithmType> {
    // serde would also accept a struct in array form; only objects carry a tag.
    let first = payload.iter().find(|b| !b.is_ascii_whitespace());
    if first != Some(&b'{') {
        return Err(EcvError::InvalidEnvelopeShape(
            "payload is JSON but not an object".into(),
        ));
    }

    let Discriminant { algorithm } = serde_json::from_slice(payload)
        .map_err(|e| EcvError::InvalidEnvelopeShape(e.to_string()))?;
    Ok(algorithm)
}

fn parse_variant<T: DeserializeOwned>(algorithm: &AlgorithmType, payload: &[u8]) -> Result<T> {
    serde_json::from_slice(payload).map_err(|e| EcvError::InvalidVariantShape {
        algorithm: algorithm.clone(),
        reason: e.to_string(),
    })
}

fn wrap(payload: &[u8]) -> String {
    format!("{ENC_PREFIX}{}", BASE64.encode(payload))
}
