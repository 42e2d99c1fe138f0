//! Key derivation and record encryption.
//!
//! A [`KeyContext`] is constructed once from caller-supplied secret
//! material and injected into the store at construction; there is no
//! process-global crypto state, and no passphrase or salt lives in the
//! source. Keys are derived with Argon2id and wrapped in a
//! zeroize-on-drop container.

use aes_gcm::{
    Aes256Gcm, Nonce,
    aead::{Aead, KeyInit},
};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::CryptoError;

/// Sentinel surfaced when a stored payload cannot be decrypted. A cipher
/// failure is localized to the payload being read; it never aborts reads
/// of other fields or records.
pub const DECRYPTION_FAILED: &str = "[DECRYPTION FAILED]";

/// Nonce length for AES-256-GCM; a fresh nonce prefixes every blob.
const NONCE_LEN: usize = 12;

/// Argon2id cost parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KdfParams {
    /// Memory in KiB.
    pub memory_kib: u32,
    /// Time iterations.
    pub iterations: u32,
    /// Parallelism degree.
    pub parallelism: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            memory_kib: 65536, // 64 MiB
            iterations: 3,
            parallelism: 4,
        }
    }
}

/// 256-bit key with automatic zeroization on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
struct DerivedKey {
    key: [u8; 32],
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Explicitly constructed key-derivation context.
///
/// Passphrase, salt and cost parameters all come from the caller (a
/// secret-management collaborator); the store receives this context at
/// construction and derives nothing on its own.
#[derive(Debug)]
pub struct KeyContext {
    key: DerivedKey,
}

impl KeyContext {
    /// Derive a 256-bit key from a passphrase and salt using Argon2id.
    pub fn derive(
        passphrase: &[u8],
        salt: &[u8; 32],
        params: &KdfParams,
    ) -> Result<Self, CryptoError> {
        let argon2_params = Params::new(
            params.memory_kib,
            params.iterations,
            params.parallelism,
            Some(32),
        )
        .map_err(|e| CryptoError::KeyDerivation(e.to_string()))?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon2_params);

        let mut key = [0u8; 32];
        argon2
            .hash_password_into(passphrase, salt, &mut key)
            .map_err(|e| CryptoError::KeyDerivation(e.to_string()))?;

        Ok(Self {
            key: DerivedKey { key },
        })
    }

    /// Build a record cipher over the derived key.
    pub fn cipher(&self) -> Result<RecordCipher, CryptoError> {
        RecordCipher::new(&self.key.key)
    }
}

/// AES-256-GCM cipher over serialized records.
pub struct RecordCipher {
    cipher: Aes256Gcm,
}

impl RecordCipher {
    fn new(key: &[u8; 32]) -> Result<Self, CryptoError> {
        Aes256Gcm::new_from_slice(key)
            .map(|cipher| Self { cipher })
            .map_err(|e| CryptoError::Encryption(e.to_string()))
    }

    /// Encrypt plaintext; returns `nonce || ciphertext+tag` with a fresh
    /// random nonce.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let mut nonce = [0u8; NONCE_LEN];
        rand::thread_rng().fill_bytes(&mut nonce);

        let ciphertext = self
            .cipher
            .encrypt(Nonce::from_slice(&nonce), plaintext)
            .map_err(|_| CryptoError::Encryption("AES-GCM encryption failed".into()))?;

        let mut blob = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        blob.extend_from_slice(&nonce);
        blob.extend_from_slice(&ciphertext);
        Ok(blob)
    }

    /// Decrypt a `nonce || ciphertext+tag` blob.
    pub fn decrypt(&self, blob: &[u8]) -> Result<Vec<u8>, CryptoError> {
        if blob.len() < NONCE_LEN {
            return Err(CryptoError::Decryption("blob too short".into()));
        }

        let (nonce, ciphertext) = blob.split_at(NONCE_LEN);
        self.cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| CryptoError::Decryption("wrong key or corrupted data".into()))
    }
}

/// Generate a random 32-byte salt.
pub fn generate_salt() -> [u8; 32] {
    let mut salt = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut salt);
    salt
}
