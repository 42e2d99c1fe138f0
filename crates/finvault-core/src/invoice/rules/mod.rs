//! Rule-based field extractors for invoice documents.
//!
//! Each field heuristic is an independent, named strategy over the
//! normalized document, so every rule can be unit-tested in isolation.
//! A rule miss never aborts the record: the field keeps its default.

pub mod amounts;
pub mod buyer;
pub mod dates;
pub mod gstin;
pub mod meta;
pub mod patterns;
pub mod vendor;

pub use amounts::{ResolvedAmounts, resolve_amounts, search_amount};
pub use buyer::BuyerNameRule;
pub use dates::InvoiceDateRule;
pub use gstin::GstinRule;
pub use meta::InvoiceNumberRule;
pub use vendor::VendorNameRule;

use crate::normalize::NormalizedText;

/// A single named field-extraction strategy.
pub trait FieldRule {
    /// Rule name, for logging and diagnostics.
    fn name(&self) -> &'static str;

    /// Attempt extraction from the normalized document.
    fn apply(&self, doc: &NormalizedText) -> Option<String>;
}
