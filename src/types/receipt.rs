//! Receipt-related types for the receipt processor
//!
//! This module defines the submitted receipt, its line items, the
//! system-assigned identifier and the stored record that pairs the two.
//!
//! Every field is kept exactly as submitted. Parsing happens during
//! validation and scoring and never rewrites the stored text.

use std::fmt;
use uuid::Uuid;

/// A single line item on a receipt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// The item description as printed
    pub short_description: String,

    /// The item price as decimal text (e.g. `"12.25"`)
    pub price: String,
}

/// A purchase receipt as submitted by a caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// The merchant name as printed
    pub retailer: String,

    /// Purchase date as `YYYY-MM-DD`
    pub purchase_date: String,

    /// Purchase time as 24-hour `HH:MM`
    pub purchase_time: String,

    /// Line items in receipt order, possibly empty
    pub items: Vec<Item>,

    /// The grand total as decimal text
    ///
    /// Not required to equal the sum of item prices.
    pub total: String,
}

/// Opaque receipt identifier
///
/// Generated from a random (v4) UUID, so collisions with previously or
/// concurrently issued identifiers are negligible. Stores additionally
/// refuse to overwrite an existing identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReceiptId(String);

impl ReceiptId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        ReceiptId(Uuid::new_v4().to_string())
    }

    /// The identifier as text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ReceiptId> for String {
    fn from(id: ReceiptId) -> Self {
        id.0
    }
}

/// A stored receipt together with its identifier
///
/// Created once at submission time and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptRecord {
    /// The identifier assigned at submission
    pub id: ReceiptId,

    /// The receipt exactly as submitted
    pub receipt: Receipt,
}
