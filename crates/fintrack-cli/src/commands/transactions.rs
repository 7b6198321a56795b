//! Transaction command implementations

use anyhow::Result;
use fintrack_core::Database;

use super::{format_amount, truncate};

pub fn cmd_transactions_list(db: &Database, limit: usize) -> Result<()> {
    let transactions = db.load_or_seed_transactions()?;

    if transactions.is_empty() {
        println!("No transactions stored. Generate demo data with:");
        println!("  fintrack seed");
        return Ok(());
    }

    println!();
    println!(
        "📝 Transactions (showing {} of {})",
        limit.min(transactions.len()),
        transactions.len()
    );
    println!("   ─────────────────────────────────────────────────────────────");

    for tx in transactions.iter().take(limit) {
        let flag = if tx.has_note() { " ⚑" } else { "" };
        println!(
            "   {} │ {:>10} │ {:<13} │ {}{}",
            tx.date,
            format_amount(tx.amount),
            tx.category.as_str(),
            truncate(&tx.merchant, 30),
            flag
        );
    }

    Ok(())
}
