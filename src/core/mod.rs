//! Core business logic module
//!
//! This module contains the receipt processing components:
//! - `traits` - The `ReceiptStore` abstraction shared by both store implementations
//! - `validation` - Field checks applied before a receipt is stored
//! - `scoring` - The points rules
//! - `receipt_store` - Store guarded by a single reader/writer lock
//! - `sharded_store` - Store backed by a sharded concurrent map
//! - `processor` - Orchestration of storage and scoring

pub mod processor;
pub mod receipt_store;
pub mod scoring;
pub mod sharded_store;
pub mod traits;
pub mod validation;

pub use processor::ReceiptProcessor;
pub use receipt_store::LockedReceiptStore;
pub use scoring::{breakdown, score, PointsBreakdown, RuleOutcome};
pub use sharded_store::ShardedReceiptStore;
pub use traits::ReceiptStore;
pub use validation::validate;
