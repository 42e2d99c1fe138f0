//! GSTIN (vendor tax identifier) extraction.

use super::FieldRule;
use super::patterns::GSTIN_PATTERN;
use crate::normalize::NormalizedText;

/// Vendor GSTIN: first match of the fixed identifier grammar anywhere in
/// the document. The vendor's identifier is printed before the buyer's on
/// every layout seen in practice, so first match wins.
pub struct GstinRule;

impl FieldRule for GstinRule {
    fn name(&self) -> &'static str {
        "vendor_gstin"
    }

    fn apply(&self, doc: &NormalizedText) -> Option<String> {
        GSTIN_PATTERN
            .find(doc.text())
            .map(|m| m.as_str().to_string())
    }
}
