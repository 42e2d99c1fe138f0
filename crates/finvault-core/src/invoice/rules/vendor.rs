//! Vendor name extraction.

use tracing::debug;

use super::FieldRule;
use crate::normalize::NormalizedText;

/// How many leading lines are searched for the vendor name.
const HEADER_WINDOW: usize = 10;

/// Boilerplate tokens that disqualify a header line, compared against the
/// space-stripped, uppercased form of the line.
const BOILERPLATE: [&str; 2] = ["TAXINVOICE", "ORIGINAL"];

/// Vendor name: the first header line that is not document boilerplate.
///
/// Invoice headers lead with stamps like "TAX INVOICE" or "ORIGINAL FOR
/// RECIPIENT" before the issuing company's name; the first line of the
/// header window that carries neither token wins.
pub struct VendorNameRule;

impl FieldRule for VendorNameRule {
    fn name(&self) -> &'static str {
        "vendor_name"
    }

    fn apply(&self, doc: &NormalizedText) -> Option<String> {
        for line in doc.lines().iter().take(HEADER_WINDOW) {
            let clean = line.replace(' ', "").to_uppercase();
            if BOILERPLATE.iter().any(|token| clean.contains(token)) {
                debug!("skipping boilerplate header line: {}", line);
                continue;
            }
            return Some(line.clone());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> NormalizedText {
        NormalizedText::new(text).unwrap()
    }

    #[test]
    fn test_skips_boilerplate_lines() {
        let doc = doc("TAX INVOICE\nORIGINAL FOR BUYER\nAcme Corp");
        assert_eq!(
            VendorNameRule.apply(&doc),
            Some("Acme Corp".to_string())
        );
    }

    #[test]
    fn test_first_qualifying_line_wins() {
        let doc = doc("Acme Corp\nSomewhere Street 5\nTAX INVOICE");
        assert_eq!(
            VendorNameRule.apply(&doc),
            Some("Acme Corp".to_string())
        );
    }

    #[test]
    fn test_boilerplate_match_ignores_spacing_and_case() {
        let doc = doc("tax invoice\nOriginal for Recipient\nAcme Corp");
        assert_eq!(
            VendorNameRule.apply(&doc),
            Some("Acme Corp".to_string())
        );
    }

    #[test]
    fn test_all_boilerplate_yields_none() {
        let doc = doc("TAX INVOICE\nORIGINAL");
        assert_eq!(VendorNameRule.apply(&doc), None);
    }

    #[test]
    fn test_window_limited_to_leading_lines() {
        let mut text = "TAX INVOICE\n".repeat(10);
        text.push_str("Acme Corp\n");
        let doc = doc(&text);
        assert_eq!(VendorNameRule.apply(&doc), None);
    }
}
