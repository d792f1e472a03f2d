//! Cryptographic collaborators for encrypted config values.
//!
//! This module provides:
//! - AES-GCM encryption and decryption (`gcm`)
//! - RSA-OAEP encryption and decryption (`oaep`)
//! - Typed key material and its `<TYPE>:<base64>` text form (`keys`)

pub mod gcm;
pub mod keys;
pub mod oaep;

// Re-export the key types so callers can write:
//   use crate::crypto::{KeyWithType, KeyType};
pub use keys::{AesKey, KeyMaterial, KeyType, KeyWithType};
