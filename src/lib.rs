//! Receipt Processor Library
//! # Overview
//!
//! This library accepts purchase receipts, stores them in memory under a
//! generated identifier, and computes loyalty points for a stored receipt.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Receipt, Amount, errors, etc.)
//! - [`cli`] - CLI arguments and environment configuration
//! - [`core`] - Business logic components:
//!   - [`core::scoring`] - The seven additive points rules
//!   - [`core::validation`] - Checks applied before a receipt is stored
//!   - [`core::receipt_store`] / [`core::sharded_store`] - In-memory receipt storage
//!   - [`core::processor`] - Process/Points orchestration
//! - [`api`] - HTTP routes and JSON payloads
//! - [`server`] - Runtime, listener and store selection
//! - [`telemetry`] - Logging setup
//!
//! # Points Rules
//!
//! - One point per alphanumeric character in the retailer name
//! - 50 points if the total is a round dollar amount
//! - 25 points if the total is a multiple of 0.25
//! - 5 points for every two items
//! - `ceil(price * 0.2)` for each item whose trimmed description length is a multiple of 3
//! - 6 points if the purchase day is odd
//! - 10 points if the purchase time is after 14:00 and before 16:00

// Module declarations
pub mod api;
pub mod cli;
pub mod core;
pub mod server;
pub mod telemetry;
pub mod types;

pub use core::{LockedReceiptStore, ReceiptProcessor, ReceiptStore, ShardedReceiptStore};
pub use types::{Amount, Item, Receipt, ReceiptError, ReceiptId, ReceiptRecord};
