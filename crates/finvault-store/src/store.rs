//! redb-backed encrypted record store.
//!
//! One table keyed by document content hash. Inserts are append-only: a
//! key collision is reported as [`InsertOutcome::DuplicateRejected`] and
//! the existing row is left untouched. redb's single-writer transactions
//! serialize concurrent inserts for the same key, so duplicate submissions
//! can never both succeed; distinct-key inserts are independent and each
//! insert is atomic on its own.

use std::path::Path;

use chrono::Local;
use redb::{Database, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use finvault_core::ExtractedInvoice;

use crate::crypto::{DECRYPTION_FAILED, KeyContext, RecordCipher};
use crate::error::{Result, StoreError};
use crate::export::ExportRow;

/// Table of stored invoice records: content hash -> postcard-serialized
/// [`StoredRecord`].
const INVOICES: TableDefinition<&str, &[u8]> = TableDefinition::new("invoices");

/// Timestamp format for the `Processed On` column.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Outcome of an insert attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new row was committed.
    Inserted,
    /// A row with the same content hash already exists; nothing was
    /// modified. "Already processed" is a successful outcome, not an
    /// error.
    DuplicateRejected,
}

/// Processing status of a stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    Processed,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Processed => "PROCESSED",
        }
    }
}

/// A persisted invoice record: plaintext summary columns for querying and
/// export, plus the encrypted full-record payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    /// Content hash of the source document; the store's unique key.
    pub file_hash: String,
    /// Original filename of the source document.
    pub filename: String,
    /// When the record was stored.
    pub processed_at: String,
    /// Flattened plaintext copies of the recovered fields, readable
    /// without decryption.
    pub invoice: ExtractedInvoice,
    /// Processing status.
    pub status: RecordStatus,
    /// AES-GCM blob of the full record serialized as JSON.
    pub payload: Vec<u8>,
}

/// Append-only, deduplicated, encrypted-at-rest invoice store.
pub struct InvoiceStore {
    db: Database,
    cipher: RecordCipher,
}

impl InvoiceStore {
    /// Open or create a store at the given path with an injected key
    /// context.
    pub fn open(path: impl AsRef<Path>, key: &KeyContext) -> Result<Self> {
        let cipher = key.cipher()?;
        let db = Database::create(path.as_ref()).map_err(storage)?;

        let write_txn = db.begin_write().map_err(storage)?;
        write_txn.open_table(INVOICES).map(|_| ()).map_err(storage)?;
        write_txn.commit().map_err(storage)?;

        Ok(Self { db, cipher })
    }

    /// Insert a record keyed by its document content hash.
    ///
    /// Returns [`InsertOutcome::DuplicateRejected`] without modifying the
    /// existing row when the key is already present.
    pub fn insert(
        &self,
        filename: &str,
        file_hash: &str,
        invoice: &ExtractedInvoice,
    ) -> Result<InsertOutcome> {
        let write_txn = self.db.begin_write().map_err(storage)?;
        let outcome = {
            let mut table = write_txn.open_table(INVOICES).map_err(storage)?;

            if table.get(file_hash).map_err(storage)?.is_some() {
                debug!("content hash {file_hash} already stored, rejecting insert");
                InsertOutcome::DuplicateRejected
            } else {
                let payload = self.cipher.encrypt(&serde_json::to_vec(invoice)?)?;
                let record = StoredRecord {
                    file_hash: file_hash.to_string(),
                    filename: filename.to_string(),
                    processed_at: Local::now().format(TIMESTAMP_FORMAT).to_string(),
                    invoice: invoice.clone(),
                    status: RecordStatus::Processed,
                    payload,
                };

                let bytes = postcard::to_stdvec(&record)?;
                table.insert(file_hash, bytes.as_slice()).map_err(storage)?;
                InsertOutcome::Inserted
            }
        };
        write_txn.commit().map_err(storage)?;

        if outcome == InsertOutcome::Inserted {
            info!("stored invoice record for {filename}");
        }
        Ok(outcome)
    }

    /// Fetch a stored record by content hash.
    pub fn get(&self, file_hash: &str) -> Result<Option<StoredRecord>> {
        let read_txn = self.db.begin_read().map_err(storage)?;
        let table = read_txn.open_table(INVOICES).map_err(storage)?;

        match table.get(file_hash).map_err(storage)? {
            Some(value) => Ok(Some(postcard::from_bytes(value.value())?)),
            None => Ok(None),
        }
    }

    /// Decrypt the full-record payload of a stored record.
    ///
    /// A cipher failure (wrong key, corrupted blob) yields the
    /// [`DECRYPTION_FAILED`] sentinel for this payload only; it is never
    /// an error and never affects other records.
    pub fn decrypt_payload(&self, file_hash: &str) -> Result<Option<String>> {
        let Some(record) = self.get(file_hash)? else {
            return Ok(None);
        };

        let text = match self.cipher.decrypt(&record.payload) {
            Ok(plaintext) => String::from_utf8(plaintext)
                .unwrap_or_else(|_| DECRYPTION_FAILED.to_string()),
            Err(err) => {
                warn!("payload decryption failed for {file_hash}: {err}");
                DECRYPTION_FAILED.to_string()
            }
        };
        Ok(Some(text))
    }

    /// All plaintext summary columns as export rows, in store-iteration
    /// order. An empty store yields zero rows, not an error.
    pub fn export(&self) -> Result<Vec<ExportRow>> {
        let read_txn = self.db.begin_read().map_err(storage)?;
        let table = read_txn.open_table(INVOICES).map_err(storage)?;

        let mut rows = Vec::new();
        for entry in table.iter().map_err(storage)? {
            let (_, value) = entry.map_err(storage)?;
            let record: StoredRecord = postcard::from_bytes(value.value())?;
            rows.push(ExportRow::from_record(&record));
        }
        Ok(rows)
    }

    /// Number of stored records.
    pub fn len(&self) -> Result<u64> {
        let read_txn = self.db.begin_read().map_err(storage)?;
        let table = read_txn.open_table(INVOICES).map_err(storage)?;
        table.len().map_err(storage)
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

fn storage(err: impl std::fmt::Display) -> StoreError {
    StoreError::Storage(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::KdfParams;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn test_key(salt: &[u8; 32]) -> KeyContext {
        let params = KdfParams {
            memory_kib: 8,
            iterations: 1,
            parallelism: 1,
        };
        KeyContext::derive(b"correct horse battery staple", salt, &params).unwrap()
    }

    fn sample_invoice(vendor: &str) -> ExtractedInvoice {
        ExtractedInvoice {
            vendor_name: vendor.to_string(),
            grand_total: "1180.00".to_string(),
            ..ExtractedInvoice::default()
        }
    }

    #[test]
    fn test_insert_then_duplicate_rejected() {
        let dir = tempdir().unwrap();
        let store = InvoiceStore::open(dir.path().join("invoices.redb"), &test_key(&[7u8; 32]))
            .unwrap();
        let invoice = sample_invoice("Acme Corp");

        assert_eq!(
            store.insert("a.txt", "hash-1", &invoice).unwrap(),
            InsertOutcome::Inserted
        );
        assert_eq!(
            store.insert("a-copy.txt", "hash-1", &invoice).unwrap(),
            InsertOutcome::DuplicateRejected
        );

        // The original row is untouched.
        let record = store.get("hash-1").unwrap().unwrap();
        assert_eq!(record.filename, "a.txt");
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_identical_fields_distinct_hashes_both_stored() {
        let dir = tempdir().unwrap();
        let store = InvoiceStore::open(dir.path().join("invoices.redb"), &test_key(&[7u8; 32]))
            .unwrap();
        let invoice = sample_invoice("Acme Corp");

        assert_eq!(
            store.insert("a.txt", "hash-1", &invoice).unwrap(),
            InsertOutcome::Inserted
        );
        assert_eq!(
            store.insert("b.txt", "hash-2", &invoice).unwrap(),
            InsertOutcome::Inserted
        );
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn test_payload_roundtrip() {
        let dir = tempdir().unwrap();
        let store = InvoiceStore::open(dir.path().join("invoices.redb"), &test_key(&[7u8; 32]))
            .unwrap();
        let invoice = sample_invoice("Acme Corp");
        store.insert("a.txt", "hash-1", &invoice).unwrap();

        let payload = store.decrypt_payload("hash-1").unwrap().unwrap();
        let decoded: ExtractedInvoice = serde_json::from_str(&payload).unwrap();
        assert_eq!(decoded, invoice);
    }

    #[test]
    fn test_wrong_key_yields_sentinel_not_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invoices.redb");

        {
            let store = InvoiceStore::open(&path, &test_key(&[7u8; 32])).unwrap();
            store
                .insert("a.txt", "hash-1", &sample_invoice("Acme Corp"))
                .unwrap();
        }

        let store = InvoiceStore::open(&path, &test_key(&[8u8; 32])).unwrap();
        let payload = store.decrypt_payload("hash-1").unwrap().unwrap();
        assert_eq!(payload, DECRYPTION_FAILED);

        // Plaintext summary columns remain readable.
        let record = store.get("hash-1").unwrap().unwrap();
        assert_eq!(record.invoice.vendor_name, "Acme Corp");
    }

    #[test]
    fn test_missing_record_is_none() {
        let dir = tempdir().unwrap();
        let store = InvoiceStore::open(dir.path().join("invoices.redb"), &test_key(&[7u8; 32]))
            .unwrap();
        assert!(store.get("no-such-hash").unwrap().is_none());
        assert!(store.decrypt_payload("no-such-hash").unwrap().is_none());
    }

    #[test]
    fn test_export_empty_store_zero_rows() {
        let dir = tempdir().unwrap();
        let store = InvoiceStore::open(dir.path().join("invoices.redb"), &test_key(&[7u8; 32]))
            .unwrap();
        assert!(store.export().unwrap().is_empty());
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_export_carries_summary_columns() {
        let dir = tempdir().unwrap();
        let store = InvoiceStore::open(dir.path().join("invoices.redb"), &test_key(&[7u8; 32]))
            .unwrap();
        store
            .insert("a.txt", "hash-1", &sample_invoice("Acme Corp"))
            .unwrap();

        let rows = store.export().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].filename, "a.txt");
        assert_eq!(rows[0].vendor_name, "Acme Corp");
        assert_eq!(rows[0].grand_total, "1180.00");
        assert_eq!(rows[0].status, "PROCESSED");
    }
}
