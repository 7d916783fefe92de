//! Thread-safe sharded receipt storage
//!
//! This module provides the `ShardedReceiptStore` struct, which stores
//! receipts in a `DashMap` (a concurrent HashMap) instead of a single locked
//! map.
//!
//! # Design
//!
//! `DashMap` splits the table into shards, each behind its own reader/writer
//! lock. Every store operation touches exactly one shard, so submissions and
//! lookups for different identifiers rarely contend, while operations on the
//! same identifier are serialized by that shard's lock.

use crate::core::traits::ReceiptStore;
use crate::types::{ReceiptId, ReceiptRecord};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// Thread-safe receipt store with fine-grained locking
///
/// # Thread Safety
///
/// All methods are safe to call from multiple threads concurrently:
/// - Concurrent reads of different receipts don't block each other
/// - Concurrent inserts into different shards don't block each other
/// - The check-and-insert in `insert_new` holds the shard lock throughout,
///   so two inserts can never both claim the same identifier
#[derive(Debug, Default)]
pub struct ShardedReceiptStore {
    /// Concurrent map of receipt identifiers to stored records
    receipts: DashMap<String, ReceiptRecord>,
}

impl ShardedReceiptStore {
    /// Create a new empty ShardedReceiptStore
    pub fn new() -> Self {
        Self {
            receipts: DashMap::new(),
        }
    }
}

impl ReceiptStore for ShardedReceiptStore {
    fn insert_new(&self, record: ReceiptRecord) -> Result<ReceiptId, ReceiptRecord> {
        match self.receipts.entry(record.id.to_string()) {
            Entry::Occupied(_) => Err(record),
            Entry::Vacant(slot) => {
                let id = record.id.clone();
                slot.insert(record);
                Ok(id)
            }
        }
    }

    fn find(&self, id: &str) -> Option<ReceiptRecord> {
        // Clone so the shard lock is released before returning
        self.receipts.get(id).map(|entry| entry.value().clone())
    }

    fn len(&self) -> usize {
        self.receipts.len()
    }
}
