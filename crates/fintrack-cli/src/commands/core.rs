//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `load_config` - Resolve analytics thresholds
//! - `cmd_init` - Initialize the database
//! - `cmd_seed` - Regenerate demo data

use std::path::Path;

use anyhow::{Context, Result};
use fintrack_core::{AnalyticsConfig, Database};

pub fn open_db(db_path: &Path) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .context("Database path must be valid UTF-8")?;
    Database::new(path_str).context("Failed to open database")
}

pub fn load_config(path: Option<&Path>) -> Result<AnalyticsConfig> {
    AnalyticsConfig::load_from(path).context("Failed to load analytics config")
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    let db = open_db(db_path)?;
    let items = db
        .load_or_seed_transactions()
        .context("Failed to seed demo transactions")?;
    println!("   {} transactions in store", items.len());

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Review the dashboard: fintrack dashboard");
    println!("  2. Start web UI: fintrack serve");

    Ok(())
}

pub fn cmd_seed(db: &Database) -> Result<()> {
    let items = db
        .reseed_transactions()
        .context("Failed to regenerate demo transactions")?;
    println!("🌱 Generated {} demo transactions", items.len());
    Ok(())
}
