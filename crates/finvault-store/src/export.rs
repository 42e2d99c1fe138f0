//! Tabular export of stored records.
//!
//! Export reads only the plaintext summary columns; the encrypted payload
//! is never touched. Column names and order are fixed.

use serde::{Deserialize, Serialize};

use crate::store::StoredRecord;

/// Cell prefixes that spreadsheet applications interpret as formulas.
const FORMULA_PREFIXES: [char; 4] = ['=', '+', '-', '@'];

/// One export row with human-readable column headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    pub filename: String,
    pub invoice_no: String,
    pub invoice_date: String,
    pub vendor_name: String,
    pub vendor_gstin: String,
    pub buyer_name: String,
    pub cgst: String,
    pub sgst: String,
    pub grand_total: String,
    pub currency: String,
    pub status: String,
    pub processed_on: String,
}

impl ExportRow {
    /// Column headers, in output order.
    pub const HEADERS: [&'static str; 12] = [
        "Filename",
        "Invoice No",
        "Invoice Date",
        "Vendor Name",
        "Vendor GSTIN",
        "Buyer Name",
        "CGST",
        "SGST",
        "Grand Total",
        "Currency",
        "Status",
        "Processed On",
    ];

    /// Flatten a stored record into an export row.
    pub fn from_record(record: &StoredRecord) -> Self {
        Self {
            filename: record.filename.clone(),
            invoice_no: record.invoice.invoice_number.clone(),
            invoice_date: record.invoice.invoice_date.clone(),
            vendor_name: record.invoice.vendor_name.clone(),
            vendor_gstin: record.invoice.vendor_gstin.clone(),
            buyer_name: record.invoice.buyer_name.clone(),
            cgst: record.invoice.cgst.clone(),
            sgst: record.invoice.sgst.clone(),
            grand_total: record.invoice.grand_total.clone(),
            currency: record.invoice.currency.clone(),
            status: record.status.as_str().to_string(),
            processed_on: record.processed_at.clone(),
        }
    }

    /// Cell values in header order.
    pub fn values(&self) -> [&str; 12] {
        [
            &self.filename,
            &self.invoice_no,
            &self.invoice_date,
            &self.vendor_name,
            &self.vendor_gstin,
            &self.buyer_name,
            &self.cgst,
            &self.sgst,
            &self.grand_total,
            &self.currency,
            &self.status,
            &self.processed_on,
        ]
    }
}

/// Neutralize spreadsheet formula injection: a cell starting with a
/// formula prefix gets a leading apostrophe.
pub fn sanitize_cell(cell: &str) -> String {
    match cell.chars().next() {
        Some(c) if FORMULA_PREFIXES.contains(&c) => format!("'{cell}"),
        _ => cell.to_string(),
    }
}
