//! Label-proximity amount resolution with arithmetic fallback.
//!
//! Monetary values are located by finding a nearby text label rather than
//! by document layout. The rightmost amount on a matching line is taken to
//! be the value; rate lines ("CGST 9%") are skipped.

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::debug;

use super::patterns::{AMOUNT_PATTERN, DECIMAL_FRACTION};

/// Keyword priority order for the grand total. The first keyword that
/// yields a value wins.
pub const TOTAL_KEYWORDS: [&str; 4] = [
    "Grand Total",
    "TOTAL AMOUNT",
    "Amount Payable",
    "Invoice Total",
];

/// Keywords accepted as a subtotal when reconstructing a missing total.
pub const SUBTOTAL_KEYWORDS: [&str; 3] = ["Subtotal", "Sub Total", "Total"];

/// Monetary fields resolved from a document. `None` means the field keeps
/// its default.
#[derive(Debug, Clone, Default)]
pub struct ResolvedAmounts {
    pub cgst: Option<String>,
    pub sgst: Option<String>,
    pub grand_total: Option<String>,
}

/// Search lines in order for an amount near any of the label keywords.
///
/// A line qualifies when any keyword matches as a case-insensitive
/// substring. A qualifying line with a percent sign but no two-decimal
/// amount is a rate line and is skipped. On a qualifying line the
/// rightmost amount wins; when the line has none, the immediately
/// following line is tried unless it contains a percent sign itself.
pub fn search_amount(lines: &[String], keywords: &[&str]) -> Option<String> {
    for (i, line) in lines.iter().enumerate() {
        let lower = line.to_lowercase();
        if !keywords.iter().any(|k| lower.contains(&k.to_lowercase())) {
            continue;
        }

        if line.contains('%') && !DECIMAL_FRACTION.is_match(line) {
            continue;
        }

        if let Some(amount) = last_amount_on(line) {
            return Some(amount);
        }

        // Labels and their values are often split across adjacent lines.
        if let Some(next) = lines.get(i + 1) {
            if next.contains('%') {
                continue;
            }
            if let Some(amount) = last_amount_on(next) {
                return Some(amount);
            }
        }
    }
    None
}

/// Rightmost amount on a line, thousands separators stripped. Two fraction
/// digits are guaranteed by the amount grammar.
fn last_amount_on(line: &str) -> Option<String> {
    AMOUNT_PATTERN
        .captures_iter(line)
        .last()
        .map(|caps| caps[1].replace(',', ""))
}

/// Resolve CGST, SGST and the grand total for a document.
///
/// The total is searched under each keyword of [`TOTAL_KEYWORDS`] in
/// priority order; when none yields a value, it is reconstructed from the
/// subtotal and the tax constituents.
pub fn resolve_amounts(lines: &[String]) -> ResolvedAmounts {
    let cgst = search_amount(lines, &["CGST"]);
    let sgst = search_amount(lines, &["SGST"]);

    let mut grand_total = None;
    for keyword in TOTAL_KEYWORDS {
        if let Some(total) = search_amount(lines, &[keyword]) {
            grand_total = Some(total);
            break;
        }
    }

    if grand_total.is_none() {
        grand_total = fallback_total(lines, cgst.as_deref(), sgst.as_deref());
    }

    ResolvedAmounts {
        cgst,
        sgst,
        grand_total,
    }
}

/// Reconstruct a missing grand total as subtotal + CGST + SGST.
///
/// Unparsable or absent constituents count as zero; the computed sum is
/// used only when strictly positive. Any failure here leaves the total at
/// its default - this path is recoverable, never fatal.
fn fallback_total(lines: &[String], cgst: Option<&str>, sgst: Option<&str>) -> Option<String> {
    let subtotal = search_amount(lines, &SUBTOTAL_KEYWORDS)
        .and_then(|s| Decimal::from_str(&s).ok())
        .unwrap_or(Decimal::ZERO);

    let cgst = cgst
        .and_then(|s| Decimal::from_str(s).ok())
        .unwrap_or(Decimal::ZERO);
    let sgst = sgst
        .and_then(|s| Decimal::from_str(s).ok())
        .unwrap_or(Decimal::ZERO);

    let computed = subtotal + cgst + sgst;
    if computed > Decimal::ZERO {
        debug!("reconstructed grand total {} from constituents", computed);
        Some(format!("{computed:.2}"))
    } else {
        None
    }
}
