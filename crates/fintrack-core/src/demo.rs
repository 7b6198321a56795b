//! Demo transaction generator
//!
//! Produces a plausible two-month transaction set for trying out the
//! dashboard:
//! - 2 monthly salary credits
//! - 3 streaming/cloud subscriptions
//! - 60 variable expenses across the spending categories
//! - 1 deliberately anomalous purchase carrying a note

use chrono::{Duration, NaiveDate, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Category, Transaction, TransactionType};

/// Days of history generated by default
pub const DEFAULT_DAYS: i64 = 60;

const VARIABLE_EXPENSES: usize = 60;

const SUBSCRIPTIONS: &[&str] = &["Netflix", "Spotify", "iCloud"];

fn merchants(category: Category) -> &'static [&'static str] {
    match category {
        Category::Groceries => &["FreshMart", "GreenGrocer", "Daily Foods"],
        Category::Transport => &["City Taxi", "MetroPass", "RideNow"],
        Category::Subscriptions => SUBSCRIPTIONS,
        Category::EatingOut => &["Pizza Plaza", "Sushi House", "Burger Box"],
        Category::Utilities => &["WaterCo", "PowerGrid", "NetFiber"],
        Category::Salary => &["Company Payroll"],
        Category::Travel => &["AirFly", "StayInn", "CityTours"],
        Category::Shopping => &["MegaStore", "TechHub", "XG INVEST LTD"],
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn debit(
    id: String,
    date: NaiveDate,
    merchant: &str,
    category: Category,
    amount: f64,
) -> Transaction {
    Transaction {
        id,
        date,
        merchant: merchant.to_string(),
        category,
        amount: -round_cents(amount),
        tx_type: TransactionType::Debit,
        note: None,
    }
}

/// Generate demo transactions ending at `today`, newest first
pub fn generate_transactions<R: Rng + ?Sized>(
    today: NaiveDate,
    n_days: i64,
    rng: &mut R,
) -> Vec<Transaction> {
    let n_days = n_days.max(0);
    let mut txs = Vec::with_capacity(2 + SUBSCRIPTIONS.len() + VARIABLE_EXPENSES + 1);

    for m in 0..2 {
        let date = today - Duration::days(30 * m + rng.gen_range(0..=3));
        txs.push(Transaction {
            id: format!("tx-salary-{}", m),
            date,
            merchant: "Company Payroll".to_string(),
            category: Category::Salary,
            amount: round_cents(1800.0 + f64::from(rng.gen_range(-100..=200_i32))),
            tx_type: TransactionType::Credit,
            note: None,
        });
    }

    for name in SUBSCRIPTIONS {
        let date = today - Duration::days(rng.gen_range(0..=n_days));
        let amount = f64::from(8 + rng.gen_range(0..=10_u32));
        txs.push(debit(
            format!("tx-sub-{}", name),
            date,
            name,
            Category::Subscriptions,
            amount,
        ));
    }

    let spending: Vec<Category> = Category::all()
        .iter()
        .copied()
        .filter(|c| *c != Category::Salary)
        .collect();

    for i in 0..VARIABLE_EXPENSES {
        let category = *spending.choose(rng).unwrap_or(&Category::Groceries);
        let merchant = merchants(category).choose(rng).copied().unwrap_or("Unknown");
        let date = today - Duration::days(rng.gen_range(0..=n_days));
        let amount = match category {
            Category::Travel | Category::Shopping => rng.gen_range(20.0..250.0),
            _ => rng.gen_range(3.0..80.0),
        };
        txs.push(debit(format!("tx-{}", i), date, merchant, category, amount));
    }

    let mut anomaly = debit(
        "tx-anomaly-1".to_string(),
        today - Duration::days(rng.gen_range(0..=20_i64.min(n_days))),
        "XG INVEST LTD",
        Category::Shopping,
        420.55,
    );
    anomaly.note = Some("Nuevo/alto".to_string());
    txs.push(anomaly);

    // Newest first; stable so equal dates keep generation order
    txs.sort_by(|a, b| b.date.cmp(&a.date));
    txs
}

/// Generate the default demo set ending today
pub fn generate_default() -> Vec<Transaction> {
    generate_transactions(
        Utc::now().date_naive(),
        DEFAULT_DAYS,
        &mut rand::thread_rng(),
    )
}
