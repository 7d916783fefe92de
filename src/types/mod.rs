//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `amount`: Exact decimal monetary amounts
//! - `receipt`: Receipt, item, identifier and stored record types
//! - `error`: Error types for receipt submission and lookup

pub mod amount;
pub mod error;
pub mod receipt;

pub use amount::{Amount, ParseAmountError};
pub use error::ReceiptError;
pub use receipt::{Item, Receipt, ReceiptId, ReceiptRecord};
