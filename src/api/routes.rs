//! HTTP routes and handlers
//!
//! | Method | Path | Success | Failure |
//! |---|---|---|---|
//! | `POST` | `/receipts/process` | `200 {"id": ...}` | `400` invalid receipt |
//! | `GET` | `/receipts/:id/points` | `200 {"points": ...}` | `404` unknown id |
//! | `GET` | `/health` | `200 {"status": "ok", ...}` | |

use crate::api::dto::{HealthResponse, PointsResponse, ProcessResponse, ReceiptPayload};
use crate::core::ReceiptProcessor;
use crate::types::ReceiptError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};

/// Build the receipt API router
pub fn router(processor: ReceiptProcessor) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(get_points))
        .with_state(processor)
}

/// POST /receipts/process
///
/// Undecodable bodies are reported the same way as receipts that fail
/// validation.
async fn process_receipt(
    State(processor): State<ReceiptProcessor>,
    payload: Result<Json<ReceiptPayload>, JsonRejection>,
) -> Result<Json<ProcessResponse>, ReceiptError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "undecodable receipt body");
        ReceiptError::malformed(&rejection.body_text())
    })?;

    let id = processor.process(payload.into())?;
    Ok(Json(ProcessResponse { id: id.into() }))
}

/// GET /receipts/:id/points
async fn get_points(
    State(processor): State<ReceiptProcessor>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ReceiptError> {
    let points = processor.points(&id)?;
    Ok(Json(PointsResponse { points }))
}

/// GET /health
async fn health(State(processor): State<ReceiptProcessor>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        receipts: processor.stored_receipts(),
    })
}
