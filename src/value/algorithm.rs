//! The algorithm tag carried in the `type` field of a modern payload.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies the encryption scheme that produced a value.
///
/// Unknown tags are kept verbatim in [`AlgorithmType::Unknown`] so they
/// survive a serde round trip; they are only rejected when the envelope
/// codec dispatches on them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AlgorithmType {
    /// AES in GCM mode.
    Aes,
    /// RSA with OAEP padding.
    Rsa,
    /// A tag this version does not recognize.
    Unknown(String),
}

impl AlgorithmType {
    pub const AES_TAG: &'static str = "AES";
    pub const RSA_TAG: &'static str = "RSA";

    /// The wire spelling of this tag.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Aes => Self::AES_TAG,
            Self::Rsa => Self::RSA_TAG,
            Self::Unknown(s) => s,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<String> for AlgorithmType {
    fn from(s: String) -> Self {
        match s.as_str() {
            Self::AES_TAG => Self::Aes,
            Self::RSA_TAG => Self::Rsa,
            _ => Self::Unknown(s),
        }
    }
}

impl From<&str> for AlgorithmType {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<AlgorithmType> for String {
    fn from(alg: AlgorithmType) -> Self {
        match alg {
            AlgorithmType::Unknown(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for AlgorithmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_parse() {
        assert_eq!(AlgorithmType::from("AES"), AlgorithmType::Aes);
        assert_eq!(AlgorithmType::from("RSA"), AlgorithmType::Rsa);
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert_eq!(
            AlgorithmType::from("aes"),
            AlgorithmType::Unknown("aes".into())
        );
    }

    #[test]
    fn unknown_tag_survives_serde() {
        let alg: AlgorithmType = serde_json::from_str("\"ROT13\"").unwrap();
        assert!(!alg.is_known());
        assert_eq!(serde_json::to_string(&alg).unwrap(), "\"ROT13\"");
    }

    #[test]
    fn known_tag_serializes_as_wire_string() {
        assert_eq!(serde_json::to_string(&AlgorithmType::Rsa).unwrap(), "\"RSA\"");
        assert_eq!(AlgorithmType::Aes.to_string(), "AES");
    }

    #[test]
    fn non_string_tag_is_rejected() {
        assert!(serde_json::from_str::<AlgorithmType>("42").is_err());
    }
}
