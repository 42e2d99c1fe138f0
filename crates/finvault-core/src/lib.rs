//! Core library for invoice data recovery.
//!
//! This crate provides:
//! - Text normalization for noisy OCR/text-layer output
//! - Rule-based field extraction (vendor, buyer, GSTIN, invoice metadata)
//! - Label-proximity amount resolution with arithmetic fallback
//! - Content-addressable document hashing for duplicate detection
//!
//! The text itself comes from an external producer (PDF text layer, OCR);
//! this crate only cares that it may be empty or noisy.

pub mod error;
pub mod hash;
pub mod invoice;
pub mod models;
pub mod normalize;

pub use error::{ExtractError, Result};
pub use hash::{hash_bytes, hash_file, hash_reader};
pub use invoice::InvoiceParser;
pub use invoice::rules::FieldRule;
pub use models::invoice::ExtractedInvoice;
pub use normalize::NormalizedText;
