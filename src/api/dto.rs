//! JSON request/response payloads
//!
//! Wire-level shapes for the receipt API and their conversion into domain
//! types. Field names follow the camelCase JSON contract; the domain types
//! keep Rust naming. Conversion is lossless: every text field is carried over
//! exactly as received.

use crate::types::{Item, Receipt};
use serde::{Deserialize, Serialize};

/// A receipt as posted to `/receipts/process`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptPayload {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<ItemPayload>,
    pub total: String,
}

/// A line item inside a [`ReceiptPayload`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    pub short_description: String,
    pub price: String,
}

/// Response body for a stored receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: String,
}

/// Response body for a points lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// Response body for the health check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub receipts: usize,
}

impl From<ItemPayload> for Item {
    fn from(payload: ItemPayload) -> Self {
        Item {
            short_description: payload.short_description,
            price: payload.price,
        }
    }
}

impl From<ReceiptPayload> for Receipt {
    fn from(payload: ReceiptPayload) -> Self {
        Receipt {
            retailer: payload.retailer,
            purchase_date: payload.purchase_date,
            purchase_time: payload.purchase_time,
            items: payload.items.into_iter().map(Item::from).collect(),
            total: payload.total,
        }
    }
}
