//! Server command implementation

use std::path::Path;

use anyhow::{Context, Result};
use fintrack_core::AnalyticsConfig;
use fintrack_server::{ServerConfig, ALLOWED_ORIGINS_ENV};

use super::open_db;

pub async fn cmd_serve(
    db_path: &Path,
    host: &str,
    port: u16,
    static_dir: Option<&Path>,
    analytics: AnalyticsConfig,
) -> Result<()> {
    println!("🚀 Starting FinTrack web server...");
    println!("   Database: {}", db_path.display());
    println!("   Listening: http://{}:{}", host, port);
    if let Some(dir) = static_dir {
        println!("   Static files: {}", dir.display());
    }
    println!(
        "   Anomaly threshold: ${:.2}, trend window: {} days",
        analytics.anomaly_threshold, analytics.trend_window_days
    );

    let config = ServerConfig::from_env(analytics);
    if config.allowed_origins.is_empty() {
        println!("   ⚠️  CORS open to any origin (set {})", ALLOWED_ORIGINS_ENV);
    } else {
        println!("   🌐 Allowed origins: {}", config.allowed_origins.join(", "));
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let db = open_db(db_path)?;

    let static_dir_str = static_dir
        .map(|p| p.to_str().context("Static dir path must be valid UTF-8"))
        .transpose()?;
    fintrack_server::serve(db, host, port, static_dir_str, config).await?;

    Ok(())
}
