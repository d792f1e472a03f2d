use thiserror::Error;

use crate::value::AlgorithmType;

/// All errors that can occur while decoding, encoding, or decrypting
/// encrypted config values.
#[derive(Debug, Error)]
pub enum EcvError {
    // --- Envelope errors ---
    #[error("encrypted value must be of the form \"enc:...\", was: {0:?}")]
    MalformedEnvelope(String),

    #[error("failed to base64-decode content: {0}")]
    InvalidEncoding(String),

    #[error("encrypted value JSON has no usable \"type\" field: {0}")]
    InvalidEnvelopeShape(String),

    #[error("unrecognized algorithm type: {0}")]
    UnknownAlgorithm(String),

    #[error("invalid {algorithm} encrypted value: {reason}")]
    InvalidVariantShape {
        algorithm: AlgorithmType,
        reason: String,
    },

    // --- Key errors ---
    #[error("key is for algorithm {actual}, but the value was encrypted with {expected}")]
    KeyAlgorithmMismatch {
        expected: AlgorithmType,
        actual: AlgorithmType,
    },

    #[error("key of type {0} cannot be used for {1}")]
    WrongKeyRole(String, &'static str),

    #[error("invalid key: {0}")]
    InvalidKey(String),

    // --- Crypto errors ---
    #[error("decryption failed: {0}")]
    DecryptionFailure(String),

    #[error("encryption failed: {0}")]
    EncryptionFailure(String),

    // --- Serialization errors ---
    #[error("serialization error: {0}")]
    SerializationError(String),

    // --- Config errors ---
    #[error("config file error: {0}")]
    ConfigError(String),

    // --- CLI errors ---
    #[error("command failed: {0}")]
    CommandFailed(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, EcvError>;
