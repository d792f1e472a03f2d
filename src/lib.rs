pub mod cli;
pub mod config;
pub mod crypto;
pub mod encrypter;
pub mod envelope;
pub mod errors;
pub mod substitute;
pub mod value;

pub use crypto::{KeyType, KeyWithType};
pub use envelope::{decode, decode_trusted, encode, ENC_PREFIX};
pub use errors::{EcvError, Result};
pub use value::{AlgorithmType, EncryptedValue};
