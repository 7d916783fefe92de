//! Lock-based receipt storage
//!
//! This module provides the `LockedReceiptStore` struct, which keeps every
//! submitted receipt in a single `HashMap` guarded by one reader/writer lock.
//! Lookups share the lock; insertions take it exclusively for the duration of
//! a single check-and-insert.

use crate::core::traits::ReceiptStore;
use crate::types::{ReceiptId, ReceiptRecord};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Receipt store guarded by a single `RwLock`
///
/// Records are immutable once inserted, so a lock poisoned by a panicking
/// thread still guards a consistent map and is recovered rather than
/// propagated.
#[derive(Debug, Default)]
pub struct LockedReceiptStore {
    /// Map of receipt identifiers to stored records
    receipts: RwLock<HashMap<String, ReceiptRecord>>,
}

impl LockedReceiptStore {
    /// Create a new empty LockedReceiptStore
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReceiptStore for LockedReceiptStore {
    fn insert_new(&self, record: ReceiptRecord) -> Result<ReceiptId, ReceiptRecord> {
        let mut receipts = self.receipts.write().unwrap_or_else(PoisonError::into_inner);

        match receipts.entry(record.id.to_string()) {
            Entry::Occupied(_) => Err(record),
            Entry::Vacant(slot) => {
                let id = record.id.clone();
                slot.insert(record);
                Ok(id)
            }
        }
    }

    fn find(&self, id: &str) -> Option<ReceiptRecord> {
        self.receipts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    fn len(&self) -> usize {
        self.receipts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
