//! Error types for the finvault-core library.

use thiserror::Error;

/// Errors raised by the extraction pipeline.
///
/// Individual field misses are not errors: every field degrades to its
/// default instead of aborting the record. Only total absence of
/// extractable text fails a document.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// No text could be recovered from the document. Terminal for that
    /// document; not retried.
    #[error("no text could be recovered from document")]
    EmptyDocument,

    /// I/O error while reading document bytes.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the finvault-core library.
pub type Result<T> = std::result::Result<T, ExtractError>;
