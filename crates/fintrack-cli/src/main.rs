//! FinTrack CLI
//!
//! Usage:
//!   fintrack init                    Initialize database
//!   fintrack dashboard               Show KPIs and anomalies
//!   fintrack analyze "<message>"     Score a message for scam tactics
//!   fintrack serve --port 8000       Start web server

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Seed => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_seed(&db)
        }
        Commands::Transactions { limit } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_transactions_list(&db, limit)
        }
        Commands::Analyze {
            message,
            locale,
            channel,
            json,
        } => commands::cmd_analyze(&message, &locale, &channel, json),
        Commands::Dashboard {
            window_days,
            top,
            json,
        } => {
            let db = commands::open_db(&cli.db)?;
            let mut config = commands::load_config(cli.config.as_deref())?;
            if let Some(days) = window_days {
                config.trend_window_days = days;
            }
            if let Some(n) = top {
                config.top_categories = n;
            }
            commands::cmd_dashboard(&db, &config, json)
        }
        Commands::Anomalies => {
            let db = commands::open_db(&cli.db)?;
            let config = commands::load_config(cli.config.as_deref())?;
            commands::cmd_anomalies(&db, &config)
        }
        Commands::Serve {
            port,
            host,
            static_dir,
        } => {
            let config = commands::load_config(cli.config.as_deref())?;
            commands::cmd_serve(&cli.db, &host, port, static_dir.as_deref(), config).await
        }
    }
}
