//! Dashboard and anomaly report commands

use anyhow::Result;
use fintrack_core::models::Transaction;
use fintrack_core::{analyze_transactions_with_config, detect_anomalies, AnalyticsConfig, Database};

use super::{format_amount, truncate};

/// Width of the widest trend bar
const BAR_WIDTH: f64 = 30.0;

pub fn cmd_dashboard(db: &Database, config: &AnalyticsConfig, json: bool) -> Result<()> {
    let items = db.load_or_seed_transactions()?;
    let analysis = analyze_transactions_with_config(&items, config);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    let kpis = &analysis.kpis;
    println!();
    println!("📊 FinTrack Dashboard");
    println!("   ─────────────────────────────");
    println!("   Income:      {}", format_amount(kpis.total_income));
    println!("   Expenses:    {}", format_amount(-kpis.total_expenses));
    println!("   Balance:     {}", format_amount(kpis.balance));
    println!(
        "   Transactions: {} ({} credits, {} debits, avg ${:.2})",
        kpis.transaction_count, kpis.credit_count, kpis.debit_count, kpis.avg_transaction
    );

    if !analysis.top_categories.is_empty() {
        println!();
        println!("🏷️  Top Categories");
        for ct in &analysis.top_categories {
            println!("   {:<13} ${:>10.2}", ct.category.as_str(), ct.total);
        }
    }

    if !analysis.trend.is_empty() {
        let peak = analysis
            .trend
            .iter()
            .map(|p| p.amount)
            .fold(0.0_f64, f64::max);
        println!();
        println!("📈 Daily Spending (last {} days)", analysis.trend.len());
        for point in &analysis.trend {
            let width = if peak > 0.0 {
                ((point.amount / peak) * BAR_WIDTH).round() as usize
            } else {
                0
            };
            println!(
                "   {} {:<30} ${:.2}",
                point.label,
                "█".repeat(width),
                point.amount
            );
        }
    }

    println!();
    if analysis.anomalies.is_empty() {
        println!("✅ No anomalies");
    } else {
        println!(
            "⚠️  {} anomalies. Run 'fintrack anomalies' to see details.",
            analysis.anomalies.len()
        );
    }

    Ok(())
}

pub fn cmd_anomalies(db: &Database, config: &AnalyticsConfig) -> Result<()> {
    let items = db.load_or_seed_transactions()?;
    let anomalies = detect_anomalies(&items, config.anomaly_threshold);

    if anomalies.is_empty() {
        println!("✅ No anomalies (threshold ${:.2})", config.anomaly_threshold);
        return Ok(());
    }

    println!();
    println!(
        "⚠️  Anomalies ({} found, threshold ${:.2})",
        anomalies.len(),
        config.anomaly_threshold
    );
    println!("   ─────────────────────────────────────────────────────────────");
    for tx in &anomalies {
        print_anomaly(tx);
    }

    Ok(())
}

fn print_anomaly(tx: &Transaction) {
    println!(
        "   {} │ {:>10} │ {}",
        tx.date,
        format_amount(tx.amount),
        truncate(&tx.merchant, 30)
    );
    if let Some(note) = tx.note.as_deref().filter(|n| !n.is_empty()) {
        println!("              └─ {}", note);
    }
}
