//! Core traits for receipt storage
//!
//! This module defines the store abstraction that allows the lock-based and
//! the sharded implementation to be used interchangeably behind an
//! `Arc<dyn ReceiptStore>`.

use crate::core::validation::validate;
use crate::types::{Receipt, ReceiptError, ReceiptId, ReceiptRecord};

/// Trait for storing and retrieving submitted receipts
///
/// Implementors provide the two primitive table operations (`insert_new` and
/// `find`), each atomic under the implementation's own locking. The public
/// contract (`submit` and `get`) is built on top of them and is identical for
/// every implementation.
pub trait ReceiptStore: Send + Sync {
    /// Insert a record unless its identifier is already present
    ///
    /// Returns the identifier on success, or hands the record back untouched
    /// if the identifier is taken. Existing records are never overwritten.
    fn insert_new(&self, record: ReceiptRecord) -> Result<ReceiptId, ReceiptRecord>;

    /// Look up a record by identifier
    fn find(&self, id: &str) -> Option<ReceiptRecord>;

    /// Number of stored receipts
    fn len(&self) -> usize;

    /// True if no receipt has been stored
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validate a receipt and store it under a fresh identifier
    ///
    /// # Errors
    ///
    /// Returns `ReceiptError::InvalidReceipt` if the total, an item price,
    /// the purchase date or the purchase time cannot be parsed. Nothing is
    /// stored in that case.
    fn submit(&self, receipt: Receipt) -> Result<ReceiptId, ReceiptError> {
        validate(&receipt)?;

        let mut record = ReceiptRecord {
            id: ReceiptId::generate(),
            receipt,
        };
        loop {
            match self.insert_new(record) {
                Ok(id) => return Ok(id),
                Err(rejected) => {
                    tracing::warn!(id = %rejected.id, "receipt id collision, regenerating");
                    record = ReceiptRecord {
                        id: ReceiptId::generate(),
                        receipt: rejected.receipt,
                    };
                }
            }
        }
    }

    /// Retrieve a stored record
    ///
    /// # Errors
    ///
    /// Returns `ReceiptError::NotFound` if no receipt is stored under `id`.
    fn get(&self, id: &str) -> Result<ReceiptRecord, ReceiptError> {
        self.find(id).ok_or_else(|| ReceiptError::not_found(id))
    }
}
