//! Invoice number extraction.

use super::FieldRule;
use super::patterns::INVOICE_NUMBER;
use crate::normalize::NormalizedText;

/// Invoice number: the token following an "invoice no" / "inv #" label,
/// letters/digits/slash/hyphen.
pub struct InvoiceNumberRule;

impl FieldRule for InvoiceNumberRule {
    fn name(&self) -> &'static str {
        "invoice_number"
    }

    fn apply(&self, doc: &NormalizedText) -> Option<String> {
        INVOICE_NUMBER
            .captures(doc.text())
            .map(|caps| caps[1].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> NormalizedText {
        NormalizedText::new(text).unwrap()
    }

    #[test]
    fn test_labeled_number() {
        let doc = doc("Invoice No: INV-2024/001\nDate: 15/04/2024");
        assert_eq!(
            InvoiceNumberRule.apply(&doc),
            Some("INV-2024/001".to_string())
        );
    }

    #[test]
    fn test_inv_hash_label() {
        let doc = doc("Inv # 42/A\nsomething");
        assert_eq!(InvoiceNumberRule.apply(&doc), Some("42/A".to_string()));
    }

    #[test]
    fn test_separator_optional() {
        let doc = doc("INVOICE NO INV001");
        assert_eq!(InvoiceNumberRule.apply(&doc), Some("INV001".to_string()));
    }

    #[test]
    fn test_absent_label() {
        let doc = doc("Receipt 12345");
        assert_eq!(InvoiceNumberRule.apply(&doc), None);
    }
}
