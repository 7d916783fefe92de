//! Error types for the receipt processor
//!
//! This module defines the typed outcomes of the two core operations.
//! Neither is fatal to the process: both are reported to the immediate caller,
//! which maps them to a client-error or not-found response.
//!
//! # Error Categories
//!
//! - **Validation Errors**: a receipt field that must parse (total, price,
//!   purchase date, purchase time) could not be parsed
//! - **Lookup Errors**: no receipt is stored under the requested identifier

use thiserror::Error;

/// Main error type for receipt submission and lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReceiptError {
    /// A structurally required receipt field could not be parsed
    ///
    /// Raised by `submit`. Nothing is stored when this is returned.
    #[error("Invalid receipt: {field} '{value}' {reason}")]
    InvalidReceipt {
        /// Path of the offending field (e.g. `total`, `items[2].price`)
        field: String,
        /// The raw value as submitted
        value: String,
        /// What the value was expected to be
        reason: String,
    },

    /// No receipt is stored under the requested identifier
    ///
    /// Raised by `get`.
    #[error("No receipt found for id '{id}'")]
    NotFound {
        /// The identifier that was looked up
        id: String,
    },
}

impl ReceiptError {
    /// Create an InvalidReceipt error for a monetary field
    pub fn invalid_amount(field: &str, value: &str) -> Self {
        ReceiptError::InvalidReceipt {
            field: field.to_string(),
            value: value.to_string(),
            reason: "is not a non-negative amount with at most two decimal places".to_string(),
        }
    }

    /// Create an InvalidReceipt error for the purchase date
    pub fn invalid_date(value: &str) -> Self {
        ReceiptError::InvalidReceipt {
            field: "purchaseDate".to_string(),
            value: value.to_string(),
            reason: "is not a calendar date (YYYY-MM-DD)".to_string(),
        }
    }

    /// Create an InvalidReceipt error for the purchase time
    pub fn invalid_time(value: &str) -> Self {
        ReceiptError::InvalidReceipt {
            field: "purchaseTime".to_string(),
            value: value.to_string(),
            reason: "is not a 24-hour time of day (HH:MM)".to_string(),
        }
    }

    /// Create an InvalidReceipt error for a payload that could not be decoded
    pub fn malformed(reason: &str) -> Self {
        ReceiptError::InvalidReceipt {
            field: "body".to_string(),
            value: String::new(),
            reason: reason.to_string(),
        }
    }

    /// Create a NotFound error
    pub fn not_found(id: &str) -> Self {
        ReceiptError::NotFound { id: id.to_string() }
    }
}
