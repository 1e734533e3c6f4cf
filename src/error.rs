//! Custom error types for sealkit
//!
//! The three cryptographic kinds (`Crypto`, `Decoding`, `Authentication`) are
//! kept distinct so callers can choose between prompting for another password
//! and treating stored data as corrupted. The remaining variants belong to the
//! command-line layer (configuration and I/O).

use thiserror::Error;

/// The main error type for sealkit operations
#[derive(Error, Debug)]
pub enum SealError {
    /// Primitive or parameter failure, including an unavailable random source
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Malformed package: bad encoding, too short, or non-UTF-8 plaintext
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// Authentication tag did not verify (wrong password or tampered package)
    #[error("Authentication failed: wrong password or corrupted package")]
    Authentication,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl SealError {
    /// Check if this is an authentication failure
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication)
    }

    /// Check if this is a decoding failure
    pub fn is_decoding(&self) -> bool {
        matches!(self, Self::Decoding(_))
    }

    /// Check if this is a primitive/parameter failure
    pub fn is_crypto(&self) -> bool {
        matches!(self, Self::Crypto(_))
    }
}

impl From<std::io::Error> for SealError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SealError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for sealkit operations
pub type SealResult<T> = Result<T, SealError>;
