//! Common regex patterns for invoice field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // GSTIN (Indian tax identifier): jurisdiction-specific fixed grammar,
    // treated as opaque - never generalized, no checksum validation.
    pub static ref GSTIN_PATTERN: Regex = Regex::new(
        r"\d{2}[A-Z]{5}\d{4}[A-Z][1-9A-Z]Z[0-9A-Z]"
    ).unwrap();

    // Buyer label with optional separator, up to the line break. The buyer
    // name is the next non-empty line after this match.
    pub static ref BUYER_LABEL: Regex = Regex::new(
        r"(?i)(?:invoice to|bill to|billed to)[ \t]*[:.\-]?[ \t]*\n"
    ).unwrap();

    // Invoice number label with optional separator, then one token.
    pub static ref INVOICE_NUMBER: Regex = Regex::new(
        r"(?i)(?:invoice\s*no|inv\s*#)\s*[:.]?\s*([A-Za-z0-9/-]+)"
    ).unwrap();

    // Date in DD/MM/YYYY or DD-MM-YYYY form, captured verbatim.
    pub static ref DATE_DMY: Regex = Regex::new(
        r"\d{2}[/-]\d{2}[/-]\d{4}"
    ).unwrap();

    // Amount: optional canonical currency token, comma-thousands integer
    // part, exactly two fraction digits. Other decimal/thousands
    // conventions are out of scope for this grammar.
    pub static ref AMOUNT_PATTERN: Regex = Regex::new(
        r"(?:INR\s*)?(\d{1,3}(?:,\d{3})*\.\d{2})"
    ).unwrap();

    // Two-decimal fragment, used to tell value lines from rate lines.
    pub static ref DECIMAL_FRACTION: Regex = Regex::new(
        r"\.\d{2}"
    ).unwrap();
}
