//! Error types for the persistence layer.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Key derivation failed.
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    /// Encryption failed.
    #[error("encryption failed: {0}")]
    Encryption(String),

    /// Decryption failed - wrong key or corrupted data.
    #[error("decryption failed: {0}")]
    Decryption(String),
}

/// Errors raised by the record store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Backing database error.
    #[error("storage error: {0}")]
    Storage(String),

    /// Stored row serialization error.
    #[error("record serialization error: {0}")]
    Serialization(#[from] postcard::Error),

    /// Full-record payload encoding error.
    #[error("record encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    /// Cryptographic error.
    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the persistence layer.
pub type Result<T> = std::result::Result<T, StoreError>;
