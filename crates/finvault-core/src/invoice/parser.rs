//! Assembles the field rules into a single extraction pass.

use tracing::debug;

use crate::error::Result;
use crate::models::invoice::ExtractedInvoice;
use crate::normalize::NormalizedText;

use super::rules::{
    BuyerNameRule, FieldRule, GstinRule, InvoiceDateRule, InvoiceNumberRule, VendorNameRule,
    resolve_amounts,
};

/// Rule-based invoice parser.
///
/// Runs every field rule over the normalized document. Extraction never
/// fails partially: a rule miss leaves the field at its default, and only
/// a document with no recoverable text at all is rejected.
pub struct InvoiceParser;

impl InvoiceParser {
    pub fn new() -> Self {
        Self
    }

    /// Run the full extraction pass over raw document text.
    pub fn parse(&self, raw_text: &str) -> Result<ExtractedInvoice> {
        let doc = NormalizedText::new(raw_text)?;
        Ok(self.parse_normalized(&doc))
    }

    /// Extract fields from an already-normalized document.
    pub fn parse_normalized(&self, doc: &NormalizedText) -> ExtractedInvoice {
        let mut invoice = ExtractedInvoice::default();

        apply_rule(&VendorNameRule, doc, &mut invoice.vendor_name);
        apply_rule(&GstinRule, doc, &mut invoice.vendor_gstin);
        apply_rule(&BuyerNameRule, doc, &mut invoice.buyer_name);
        apply_rule(&InvoiceNumberRule, doc, &mut invoice.invoice_number);
        apply_rule(&InvoiceDateRule, doc, &mut invoice.invoice_date);

        let amounts = resolve_amounts(doc.lines());
        if let Some(cgst) = amounts.cgst {
            invoice.cgst = cgst;
        }
        if let Some(sgst) = amounts.sgst {
            invoice.sgst = sgst;
        }
        if let Some(total) = amounts.grand_total {
            invoice.grand_total = total;
        }

        invoice
    }
}

impl Default for InvoiceParser {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_rule(rule: &dyn FieldRule, doc: &NormalizedText, field: &mut String) {
    match rule.apply(doc) {
        Some(value) => *field = value,
        None => debug!("rule {} found no match, keeping default", rule.name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;
    use pretty_assertions::assert_eq;

    const FULL_INVOICE: &str = "\
TAX INVOICE
ORIGINAL FOR RECIPIENT
Acme Traders Pvt Ltd
GSTIN: 27AAPFU0939F1ZV
Invoice No: INV-2024/001
Date: 15/04/2024
Bill To:
Globex Industries
Subtotal ₹1,000.00
CGST 9% 90.00
SGST 9% 90.00
Grand Total ₹1,180.00
";

    #[test]
    fn test_parse_full_invoice() {
        let invoice = InvoiceParser::new().parse(FULL_INVOICE).unwrap();

        assert_eq!(invoice.vendor_name, "Acme Traders Pvt Ltd");
        assert_eq!(invoice.vendor_gstin, "27AAPFU0939F1ZV");
        assert_eq!(invoice.buyer_name, "Globex Industries");
        assert_eq!(invoice.invoice_number, "INV-2024/001");
        assert_eq!(invoice.invoice_date, "15/04/2024");
        assert_eq!(invoice.cgst, "90.00");
        assert_eq!(invoice.sgst, "90.00");
        assert_eq!(invoice.grand_total, "1180.00");
        assert_eq!(invoice.currency, "INR");
    }

    #[test]
    fn test_unmatched_fields_keep_defaults() {
        let invoice = InvoiceParser::new()
            .parse("just some unrelated text\nwith two lines")
            .unwrap();

        // The first line is not boilerplate, so it becomes the vendor.
        assert_eq!(invoice.vendor_name, "just some unrelated text");
        assert_eq!(invoice.invoice_number, "N/A");
        assert_eq!(invoice.invoice_date, "N/A");
        assert_eq!(invoice.vendor_gstin, "N/A");
        assert_eq!(invoice.buyer_name, "Unknown");
        assert_eq!(invoice.cgst, "0.00");
        assert_eq!(invoice.sgst, "0.00");
        assert_eq!(invoice.grand_total, "0.00");
    }

    #[test]
    fn test_missing_total_reconstructed() {
        let text = "\
Acme Traders Pvt Ltd
Subtotal 100.00
CGST 9.00
SGST 9.00
";
        let invoice = InvoiceParser::new().parse(text).unwrap();
        assert_eq!(invoice.grand_total, "118.00");
    }

    #[test]
    fn test_empty_document_rejected() {
        assert!(matches!(
            InvoiceParser::new().parse(""),
            Err(ExtractError::EmptyDocument)
        ));
    }
}
