//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Init/seed commands and shared utilities (open_db, load_config)
//! - `analyze` - Message risk scoring
//! - `dashboard` - Dashboard and anomaly reports
//! - `serve` - Web server command
//! - `transactions` - Transaction listing

pub mod analyze;
pub mod core;
pub mod dashboard;
pub mod serve;
pub mod transactions;

// Re-export command functions for main.rs
pub use analyze::*;
pub use core::*;
pub use dashboard::*;
pub use serve::*;
pub use transactions::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format a signed amount, red for expenses and green for income
pub fn format_amount(amount: f64) -> String {
    if amount < 0.0 {
        format!("\x1b[31m-${:.2}\x1b[0m", amount.abs())
    } else {
        format!("\x1b[32m+${:.2}\x1b[0m", amount)
    }
}
