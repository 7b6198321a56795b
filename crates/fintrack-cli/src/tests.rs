//! CLI command tests

use chrono::NaiveDate;
use fintrack_core::models::{Category, Transaction, TransactionType};
use fintrack_core::{AnalyticsConfig, Database};

use crate::commands::{self, format_amount, truncate};

fn setup_test_db() -> Database {
    Database::in_memory().unwrap()
}

fn store_sample(db: &Database) {
    let items = vec![
        Transaction {
            id: "tx-salary-0".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            merchant: "Company Payroll".to_string(),
            category: Category::Salary,
            amount: 1800.0,
            tx_type: TransactionType::Credit,
            note: None,
        },
        Transaction {
            id: "tx-0".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
            merchant: "Café Olé".to_string(),
            category: Category::EatingOut,
            amount: -12.5,
            tx_type: TransactionType::Debit,
            note: None,
        },
    ];
    db.save_transactions(&items).unwrap();
}

// ========== Core Command Tests ==========

#[test]
fn test_cmd_init_creates_and_seeds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fintrack.db");

    commands::cmd_init(&path).unwrap();
    assert!(path.exists());

    let db = commands::open_db(&path).unwrap();
    assert_eq!(db.load_transactions().unwrap().unwrap().len(), 66);
}

#[test]
fn test_cmd_init_keeps_existing_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fintrack.db");

    {
        let db = commands::open_db(&path).unwrap();
        store_sample(&db);
    }

    commands::cmd_init(&path).unwrap();
    let db = commands::open_db(&path).unwrap();
    assert_eq!(db.load_transactions().unwrap().unwrap().len(), 2);
}

#[test]
fn test_cmd_seed_replaces_data() {
    let db = setup_test_db();
    store_sample(&db);

    commands::cmd_seed(&db).unwrap();
    assert_eq!(db.load_transactions().unwrap().unwrap().len(), 66);
}

#[test]
fn test_load_config_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "").unwrap();

    let config = commands::load_config(Some(path.as_path())).unwrap();
    assert_eq!(config, AnalyticsConfig::default());
}

#[test]
fn test_load_config_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");
    let result = commands::load_config(Some(path.as_path()));
    assert!(result.is_err());
}

// ========== Transactions Command Tests ==========

#[test]
fn test_cmd_transactions_list() {
    let db = setup_test_db();
    store_sample(&db);
    assert!(commands::cmd_transactions_list(&db, 20).is_ok());
}

#[test]
fn test_cmd_transactions_list_seeds_empty_store() {
    let db = setup_test_db();
    commands::cmd_transactions_list(&db, 5).unwrap();
    assert!(db.load_transactions().unwrap().is_some());
}

// ========== Analysis Command Tests ==========

#[test]
fn test_cmd_analyze() {
    let message = "AVISO URGENTE: Su cuenta será SUSPENDIDA hoy. Verifique ahora: http://bit.ly/xyz";
    assert!(commands::cmd_analyze(message, "es", "sms", false).is_ok());
    assert!(commands::cmd_analyze(message, "es", "sms", true).is_ok());
}

#[test]
fn test_cmd_analyze_empty_message() {
    assert!(commands::cmd_analyze("", "es", "email", false).is_ok());
}

// ========== Dashboard Command Tests ==========

#[test]
fn test_cmd_dashboard() {
    let db = setup_test_db();
    store_sample(&db);
    let config = AnalyticsConfig::default();
    assert!(commands::cmd_dashboard(&db, &config, false).is_ok());
    assert!(commands::cmd_dashboard(&db, &config, true).is_ok());
}

#[test]
fn test_cmd_dashboard_zero_window() {
    let db = setup_test_db();
    store_sample(&db);
    let config = AnalyticsConfig {
        trend_window_days: 0,
        top_categories: 0,
        ..AnalyticsConfig::default()
    };
    assert!(commands::cmd_dashboard(&db, &config, false).is_ok());
}

#[test]
fn test_cmd_anomalies() {
    let db = setup_test_db();
    store_sample(&db);
    assert!(commands::cmd_anomalies(&db, &AnalyticsConfig::default()).is_ok());

    let strict = AnalyticsConfig {
        anomaly_threshold: 10_000.0,
        ..AnalyticsConfig::default()
    };
    assert!(commands::cmd_anomalies(&db, &strict).is_ok());
}

// ========== Helper Tests ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("exactly10!", 10), "exactly10!");
    assert_eq!(truncate("this is a long merchant", 10), "this is...");
}

#[test]
fn test_truncate_multibyte() {
    assert_eq!(truncate("Café Olé Bistró", 8), "Café ...");
}

#[test]
fn test_format_amount() {
    assert_eq!(format_amount(-12.5), "\x1b[31m-$12.50\x1b[0m");
    assert_eq!(format_amount(1800.0), "\x1b[32m+$1800.00\x1b[0m");
}
