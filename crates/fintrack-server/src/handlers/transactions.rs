//! Stored transaction set handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::{AppError, AppState, StatusResponse};
use fintrack_core::models::{validate_transactions, Transaction};

#[derive(Serialize)]
pub struct TransactionListResponse {
    pub count: usize,
    pub items: Vec<Transaction>,
}

/// GET /api/transactions - Current transaction set, seeding demo data on first use
pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TransactionListResponse>, AppError> {
    let items = state.db.load_or_seed_transactions()?;
    Ok(Json(TransactionListResponse {
        count: items.len(),
        items,
    }))
}

/// PUT /api/transactions - Replace the stored set
pub async fn replace_transactions(
    State(state): State<Arc<AppState>>,
    Json(items): Json<Vec<Transaction>>,
) -> Result<Json<StatusResponse>, AppError> {
    validate_transactions(&items).map_err(|e| AppError::bad_request(&e.to_string()))?;
    state.db.save_transactions(&items)?;

    info!(count = items.len(), "Replaced stored transactions");
    Ok(Json(StatusResponse {
        status: "saved",
        count: items.len(),
    }))
}

/// POST /api/seed - Regenerate demo data
pub async fn seed_transactions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatusResponse>, AppError> {
    let items = state.db.reseed_transactions()?;
    Ok(Json(StatusResponse {
        status: "seeded",
        count: items.len(),
    }))
}
