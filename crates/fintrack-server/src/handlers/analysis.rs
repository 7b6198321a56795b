//! Analysis handlers: message risk scoring and dashboard

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{AppError, AppState, MAX_WINDOW_DAYS};
use fintrack_core::models::{AnalysisResult, Transaction, TransactionAnalysis};
use fintrack_core::{analyze_transactions_with_config, classify_message, AnalyticsConfig};

/// Channels a message can arrive through
const CHANNELS: &[&str] = &["sms", "email", "whatsapp"];

#[derive(Debug, Deserialize)]
pub struct AnalyzeMessageRequest {
    pub message: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_channel")]
    pub channel: String,
}

fn default_locale() -> String {
    "es".to_string()
}

fn default_channel() -> String {
    "sms".to_string()
}

/// POST /api/analyze-message - Score a message for manipulation tactics
pub async fn analyze_message(
    Json(body): Json<AnalyzeMessageRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    let channel = body.channel.to_lowercase();
    if !CHANNELS.contains(&channel.as_str()) {
        return Err(AppError::bad_request(&format!(
            "Unknown channel: {} (use sms, email or whatsapp)",
            body.channel
        )));
    }

    Ok(Json(classify_message(
        &body.message,
        Some(body.locale.as_str()),
        Some(channel.as_str()),
    )))
}

/// Query parameters overriding dashboard thresholds
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub window_days: Option<usize>,
    pub top: Option<usize>,
}

fn apply_overrides(base: &AnalyticsConfig, params: &DashboardQuery) -> Result<AnalyticsConfig, AppError> {
    let mut config = base.clone();
    if let Some(days) = params.window_days {
        if days > MAX_WINDOW_DAYS {
            return Err(AppError::bad_request(&format!(
                "window_days must be at most {}",
                MAX_WINDOW_DAYS
            )));
        }
        config.trend_window_days = days;
    }
    if let Some(top) = params.top {
        config.top_categories = top;
    }
    Ok(config)
}

/// GET /api/dashboard - KPIs, categories, trend and anomalies of the stored set
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DashboardQuery>,
) -> Result<Json<TransactionAnalysis>, AppError> {
    let config = apply_overrides(&state.config.analytics, &params)?;
    let items = state.db.load_or_seed_transactions()?;
    Ok(Json(analyze_transactions_with_config(&items, &config)))
}

/// POST /api/analyze-transactions - Analyze a caller-supplied set without storing it
pub async fn analyze_transactions(
    State(state): State<Arc<AppState>>,
    Json(items): Json<Vec<Transaction>>,
) -> Json<TransactionAnalysis> {
    Json(analyze_transactions_with_config(
        &items,
        &state.config.analytics,
    ))
}
