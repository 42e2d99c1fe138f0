//! Text normalization for raw document text.
//!
//! Rupee invoices arrive with the currency marker in several encodings:
//! the `₹` glyph, its UTF-8-read-as-Latin-1 mojibake form, and the textual
//! abbreviations. All are canonicalized to a single `INR ` token before any
//! pattern matching, so the amount grammar only has to know one prefix.

use crate::error::{ExtractError, Result};

/// Currency encodings replaced during normalization. `Rs.` comes before
/// `Rs` so the longer form is consumed first.
const CURRENCY_ENCODINGS: [&str; 4] = ["â‚¹", "₹", "Rs.", "Rs"];

/// Canonical currency token. It contains none of the source encodings,
/// which makes normalization idempotent.
const CANONICAL_CURRENCY: &str = "INR ";

/// Normalized document text plus its non-empty, trimmed lines.
///
/// Line order is preserved from the source: it is semantically meaningful,
/// header fields appear near the top.
#[derive(Debug, Clone)]
pub struct NormalizedText {
    text: String,
    lines: Vec<String>,
}

impl NormalizedText {
    /// Normalize raw document text.
    ///
    /// Returns [`ExtractError::EmptyDocument`] when no text was recovered
    /// at all (empty or whitespace-only input).
    pub fn new(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Err(ExtractError::EmptyDocument);
        }

        let mut text = raw.to_string();
        for encoding in CURRENCY_ENCODINGS {
            text = text.replace(encoding, CANONICAL_CURRENCY);
        }

        let lines = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect();

        Ok(Self { text, lines })
    }

    /// Full normalized text, line structure preserved.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Non-empty, trimmed lines in original order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}
