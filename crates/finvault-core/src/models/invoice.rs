//! Invoice field record.

use serde::{Deserialize, Serialize};

/// Structured fields recovered from a single invoice document.
///
/// Every field is always present: an unmatched field keeps its default
/// rather than going missing, so downstream consumers never deal with
/// absent keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractedInvoice {
    /// Invoice number/identifier.
    pub invoice_number: String,

    /// Invoice date in the raw matched `DD[sep]MM[sep]YYYY` form.
    /// Day/month order in source documents is ambiguous, so the match is
    /// kept verbatim instead of being parsed into a date type.
    pub invoice_date: String,

    /// Vendor (seller) name.
    pub vendor_name: String,

    /// Vendor GSTIN (Indian goods-and-services tax identifier).
    pub vendor_gstin: String,

    /// Buyer name.
    pub buyer_name: String,

    /// Central GST amount, exactly two fraction digits.
    pub cgst: String,

    /// State GST amount, exactly two fraction digits.
    pub sgst: String,

    /// Grand total, exactly two fraction digits.
    pub grand_total: String,

    /// Currency code.
    pub currency: String,
}

impl Default for ExtractedInvoice {
    fn default() -> Self {
        Self {
            invoice_number: "N/A".to_string(),
            invoice_date: "N/A".to_string(),
            vendor_name: "Unknown".to_string(),
            vendor_gstin: "N/A".to_string(),
            buyer_name: "Unknown".to_string(),
            cgst: "0.00".to_string(),
            sgst: "0.00".to_string(),
            grand_total: "0.00".to_string(),
            currency: "INR".to_string(),
        }
    }
}
