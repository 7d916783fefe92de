//! HTTP API module
//!
//! # Components
//!
//! - `dto` - JSON payloads and conversion into domain types
//! - `errors` - JSON error responses for `ReceiptError`
//! - `routes` - Axum router and handlers

pub mod dto;
pub mod errors;
pub mod routes;

pub use dto::{ItemPayload, PointsResponse, ProcessResponse, ReceiptPayload};
pub use routes::router;
