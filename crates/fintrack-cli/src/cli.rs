//! CLI argument definitions using clap
//!
//! Command implementations live in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// FinTrack - Personal finance dashboard and scam-message screening
#[derive(Parser)]
#[command(name = "fintrack")]
#[command(about = "Personal finance analytics and message risk scoring", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "fintrack.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Analytics config file (defaults to the data-dir override, then built-in values)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Replace stored transactions with freshly generated demo data
    Seed,

    /// List stored transactions (seeds demo data on first use)
    Transactions {
        /// Maximum number to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Score a message for manipulation tactics
    Analyze {
        /// Message text
        message: String,

        /// Message locale
        #[arg(long, default_value = "es")]
        locale: String,

        /// Channel the message arrived through
        #[arg(long, default_value = "sms", value_parser = ["sms", "email", "whatsapp"])]
        channel: String,

        /// Print the raw JSON result
        #[arg(long)]
        json: bool,
    },

    /// Show KPIs, category totals, spending trend and anomalies
    Dashboard {
        /// Number of most recent spending days in the trend
        #[arg(long)]
        window_days: Option<usize>,

        /// Number of top categories to show
        #[arg(long)]
        top: Option<usize>,

        /// Print the raw JSON result
        #[arg(long)]
        json: bool,
    },

    /// List transactions flagged as anomalous
    Anomalies,

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Directory of static files to serve (e.g. the built web UI)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
}
