//! FinTrack Core Library
//!
//! Shared functionality for the FinTrack personal finance tool:
//! - Rule-based risk scoring for SMS/email/DM messages
//! - Transaction analytics (KPIs, category totals, spending trend, anomalies)
//! - Demo transaction generator
//! - Key-value store holding the current transaction set
//! - Analytics configuration

pub mod analytics;
pub mod classify;
pub mod config;
pub mod db;
pub mod demo;
pub mod error;
pub mod models;

pub use analytics::{
    analyze_transactions, analyze_transactions_with_config, compute_category_totals,
    compute_kpis, compute_trend, detect_anomalies, top_categories,
};
pub use classify::{classify, classify_message};
pub use config::AnalyticsConfig;
pub use db::Database;
pub use error::{Error, Result};
pub use models::{
    AnalysisResult, Category, CategoryTotal, KpiSummary, RiskLabel, Tactic, Transaction,
    TransactionAnalysis, TransactionType, TrendPoint,
};
