//! Encrypted, deduplicating persistence for recovered invoice records.
//!
//! This crate provides:
//! - An explicitly constructed key-derivation context (Argon2id) and an
//!   AES-256-GCM record cipher
//! - A redb-backed append-only store keyed by document content hash
//! - Tabular export of the plaintext summary columns
//!
//! Records are never mutated or deleted: an insert for an existing content
//! hash is rejected, which is the system's duplicate-detection contract.

pub mod crypto;
pub mod error;
pub mod export;
pub mod store;

pub use crypto::{DECRYPTION_FAILED, KdfParams, KeyContext, RecordCipher, generate_salt};
pub use error::{CryptoError, Result, StoreError};
pub use export::{ExportRow, sanitize_cell};
pub use store::{InsertOutcome, InvoiceStore, RecordStatus, StoredRecord};
