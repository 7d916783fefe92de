//! Receipt processing orchestration
//!
//! This module provides the `ReceiptProcessor`, the entry point the HTTP layer
//! calls. It coordinates the receipt store and the scoring engine:
//! - **Process**: validate and store a receipt, returning its new identifier
//! - **Points**: look a receipt up by identifier and score it

use crate::core::scoring::{self, PointsBreakdown};
use crate::core::traits::ReceiptStore;
use crate::types::{Receipt, ReceiptError, ReceiptId};
use std::sync::Arc;

/// Coordinates receipt storage and scoring
///
/// Cheap to clone; clones share the same underlying store.
#[derive(Clone)]
pub struct ReceiptProcessor {
    store: Arc<dyn ReceiptStore>,
}

impl ReceiptProcessor {
    /// Create a processor backed by the given store
    pub fn new(store: Arc<dyn ReceiptStore>) -> Self {
        Self { store }
    }

    /// Validate and store a receipt
    ///
    /// # Errors
    ///
    /// Returns `ReceiptError::InvalidReceipt` if a required field cannot be
    /// parsed. The receipt is not stored in that case.
    pub fn process(&self, receipt: Receipt) -> Result<ReceiptId, ReceiptError> {
        let retailer = receipt.retailer.clone();

        match self.store.submit(receipt) {
            Ok(id) => {
                tracing::info!(%id, %retailer, "receipt stored");
                Ok(id)
            }
            Err(e) => {
                tracing::warn!(%retailer, error = %e, "receipt rejected");
                Err(e)
            }
        }
    }

    /// Compute the points for a stored receipt
    ///
    /// # Errors
    ///
    /// Returns `ReceiptError::NotFound` if no receipt is stored under `id`.
    pub fn points(&self, id: &str) -> Result<u64, ReceiptError> {
        let breakdown = self.breakdown(id)?;
        let points = breakdown.total();

        for (rule, outcome) in breakdown.outcomes() {
            tracing::debug!(id, rule, points = outcome.points(), ?outcome, "rule applied");
        }
        tracing::info!(id, points, "receipt scored");

        Ok(points)
    }

    /// Per-rule scoring outcomes for a stored receipt
    ///
    /// # Errors
    ///
    /// Returns `ReceiptError::NotFound` if no receipt is stored under `id`.
    pub fn breakdown(&self, id: &str) -> Result<PointsBreakdown, ReceiptError> {
        let record = self.store.get(id).inspect_err(|_| {
            tracing::warn!(id, "points requested for unknown receipt");
        })?;

        Ok(scoring::breakdown(&record.receipt))
    }

    /// Number of receipts stored so far
    pub fn stored_receipts(&self) -> usize {
        self.store.len()
    }
}
