//! Buyer name extraction.

use super::FieldRule;
use super::patterns::BUYER_LABEL;
use crate::normalize::NormalizedText;

/// Buyer name: the first non-empty line after an "invoice to" / "bill to" /
/// "billed to" label (optional separator, then a line break).
pub struct BuyerNameRule;

impl FieldRule for BuyerNameRule {
    fn name(&self) -> &'static str {
        "buyer_name"
    }

    fn apply(&self, doc: &NormalizedText) -> Option<String> {
        let label = BUYER_LABEL.find(doc.text())?;
        doc.text()[label.end()..]
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .map(String::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> NormalizedText {
        NormalizedText::new(text).unwrap()
    }

    #[test]
    fn test_captures_line_after_label() {
        let doc = doc("Bill To:\nGlobex Industries\nPune");
        assert_eq!(
            BuyerNameRule.apply(&doc),
            Some("Globex Industries".to_string())
        );
    }

    #[test]
    fn test_label_variants_case_insensitive() {
        for label in ["INVOICE TO", "billed to -", "Bill to."] {
            let text = format!("{label}\nGlobex Industries");
            let doc = doc(&text);
            assert_eq!(
                BuyerNameRule.apply(&doc),
                Some("Globex Industries".to_string()),
                "label {label:?}"
            );
        }
    }

    #[test]
    fn test_skips_blank_lines_after_label() {
        let doc = doc("Invoice To:\n   \n\nGlobex Industries");
        assert_eq!(
            BuyerNameRule.apply(&doc),
            Some("Globex Industries".to_string())
        );
    }

    #[test]
    fn test_no_label_yields_none() {
        let doc = doc("Acme Corp\nGlobex Industries");
        assert_eq!(BuyerNameRule.apply(&doc), None);
    }
}
