//! Invoice date extraction.
//!
//! The first `DD[sep]MM[sep]YYYY` substring is captured verbatim. Day and
//! month order in source documents is ambiguous, so the matched text is
//! preserved rather than parsed into a date type.

use super::FieldRule;
use super::patterns::DATE_DMY;
use crate::normalize::NormalizedText;

/// Invoice date: first date-shaped substring in the document.
pub struct InvoiceDateRule;

impl FieldRule for InvoiceDateRule {
    fn name(&self) -> &'static str {
        "invoice_date"
    }

    fn apply(&self, doc: &NormalizedText) -> Option<String> {
        DATE_DMY.find(doc.text()).map(|m| m.as_str().to_string())
    }
}
