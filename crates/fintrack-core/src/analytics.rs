//! Transaction analytics
//!
//! Pure aggregations over a transaction set:
//! - KPIs: income, expenses, balance, average expense
//! - Spending by category (debits only, largest first)
//! - Daily spending trend over the most recent spending days
//! - Anomalies: large transactions or ones carrying a note
//!
//! Nothing here validates input. Records are assumed to satisfy the
//! amount/type sign invariant (see [`Transaction::validate`]).

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::config::AnalyticsConfig;
use crate::models::{
    Category, CategoryTotal, KpiSummary, Transaction, TransactionAnalysis, TrendPoint,
};

/// Income, expenses and averages for a transaction set
pub fn compute_kpis(items: &[Transaction]) -> KpiSummary {
    let mut total_income = 0.0;
    let mut total_expenses = 0.0;
    let mut credit_count = 0;
    let mut debit_count = 0;

    for tx in items {
        if tx.is_credit() {
            total_income += tx.amount;
            credit_count += 1;
        } else {
            total_expenses += tx.amount.abs();
            debit_count += 1;
        }
    }

    // No debits means no average, not a division by zero
    let avg_transaction = if debit_count == 0 {
        0.0
    } else {
        total_expenses / debit_count as f64
    };

    KpiSummary {
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
        avg_transaction,
        transaction_count: items.len(),
        credit_count,
        debit_count,
    }
}

/// Debit spend per category, largest first.
///
/// Categories with equal totals keep the order in which they first appear
/// in `items`.
pub fn compute_category_totals(items: &[Transaction]) -> Vec<CategoryTotal> {
    let mut index: HashMap<Category, usize> = HashMap::new();
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for tx in items.iter().filter(|tx| tx.is_debit()) {
        let slot = *index.entry(tx.category).or_insert_with(|| {
            totals.push(CategoryTotal {
                category: tx.category,
                total: 0.0,
            });
            totals.len() - 1
        });
        totals[slot].total += tx.amount.abs();
    }

    // Stable sort keeps first-seen order on ties
    totals.sort_by(|a, b| b.total.total_cmp(&a.total));
    totals
}

/// The first `n` entries of an already sorted category breakdown
pub fn top_categories(category_totals: &[CategoryTotal], n: usize) -> Vec<CategoryTotal> {
    category_totals.iter().take(n).cloned().collect()
}

/// Daily debit spend over the last `window_days` dates that have spending.
///
/// The window counts distinct dates present in the data, not calendar days,
/// so sparse data yields fewer points. Points are in ascending date order and
/// `cumulative` is a running sum over the emitted points only.
pub fn compute_trend(items: &[Transaction], window_days: usize) -> Vec<TrendPoint> {
    let mut daily: BTreeMap<chrono::NaiveDate, f64> = BTreeMap::new();
    for tx in items.iter().filter(|tx| tx.is_debit()) {
        *daily.entry(tx.date).or_insert(0.0) += tx.amount.abs();
    }

    let skip = daily.len().saturating_sub(window_days);
    let mut cumulative = 0.0;

    daily
        .into_iter()
        .skip(skip)
        .map(|(date, amount)| {
            cumulative += amount;
            TrendPoint {
                date,
                label: date.format("%m-%d").to_string(),
                amount,
                cumulative,
            }
        })
        .collect()
}

/// Transactions above `threshold` in magnitude, or carrying a note.
/// Input order is preserved.
pub fn detect_anomalies(items: &[Transaction], threshold: f64) -> Vec<Transaction> {
    items
        .iter()
        .filter(|tx| tx.amount.abs() > threshold || tx.has_note())
        .cloned()
        .collect()
}

/// Full dashboard analysis with default thresholds
pub fn analyze_transactions(items: &[Transaction]) -> TransactionAnalysis {
    analyze_transactions_with_config(items, &AnalyticsConfig::default())
}

/// Full dashboard analysis with explicit thresholds
pub fn analyze_transactions_with_config(
    items: &[Transaction],
    config: &AnalyticsConfig,
) -> TransactionAnalysis {
    let kpis = compute_kpis(items);
    let category_totals = compute_category_totals(items);
    let top = top_categories(&category_totals, config.top_categories);
    let trend = compute_trend(items, config.trend_window_days);
    let anomalies = detect_anomalies(items, config.anomaly_threshold);

    debug!(
        transactions = kpis.transaction_count,
        categories = category_totals.len(),
        trend_points = trend.len(),
        anomalies = anomalies.len(),
        "Analyzed transactions"
    );

    TransactionAnalysis {
        kpis,
        category_totals,
        top_categories: top,
        trend,
        anomalies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;
    use chrono::NaiveDate;

    fn debit(id: &str, date: &str, category: Category, amount: f64) -> Transaction {
        Transaction {
            id: id.to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            merchant: "Test Merchant".to_string(),
            category,
            amount: -amount.abs(),
            tx_type: TransactionType::Debit,
            note: None,
        }
    }

    fn credit(id: &str, date: &str, amount: f64) -> Transaction {
        Transaction {
            id: id.to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            merchant: "Company Payroll".to_string(),
            category: Category::Salary,
            amount,
            tx_type: TransactionType::Credit,
            note: None,
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            credit("tx-salary-0", "2024-03-01", 1800.0),
            debit("tx-0", "2024-03-02", Category::Groceries, 40.0),
            debit("tx-1", "2024-03-02", Category::Transport, 10.0),
            debit("tx-2", "2024-03-03", Category::Groceries, 20.0),
            debit("tx-3", "2024-03-05", Category::Shopping, 120.0),
            credit("tx-salary-1", "2024-02-01", 1900.0),
        ]
    }

    #[test]
    fn test_kpis() {
        let kpis = compute_kpis(&sample());
        assert_eq!(kpis.total_income, 3700.0);
        assert_eq!(kpis.total_expenses, 190.0);
        assert_eq!(kpis.balance, 3510.0);
        assert_eq!(kpis.avg_transaction, 47.5);
        assert_eq!(kpis.transaction_count, 6);
        assert_eq!(kpis.credit_count, 2);
        assert_eq!(kpis.debit_count, 4);
    }

    #[test]
    fn test_kpis_empty() {
        let kpis = compute_kpis(&[]);
        assert_eq!(kpis, KpiSummary::default());
        assert_eq!(kpis.avg_transaction, 0.0);
    }

    #[test]
    fn test_kpis_only_credits_has_zero_average() {
        let kpis = compute_kpis(&[credit("a", "2024-01-01", 100.0)]);
        assert_eq!(kpis.avg_transaction, 0.0);
        assert_eq!(kpis.balance, 100.0);
    }

    #[test]
    fn test_balance_is_income_minus_expenses() {
        let items = vec![
            credit("a", "2024-01-01", 1234.56),
            debit("b", "2024-01-02", Category::Travel, 99.99),
            debit("c", "2024-01-03", Category::Utilities, 0.01),
        ];
        let kpis = compute_kpis(&items);
        assert_eq!(kpis.balance, kpis.total_income - kpis.total_expenses);
    }

    #[test]
    fn test_category_totals_sorted_and_debit_only() {
        let totals = compute_category_totals(&sample());
        assert_eq!(
            totals,
            vec![
                CategoryTotal {
                    category: Category::Shopping,
                    total: 120.0
                },
                CategoryTotal {
                    category: Category::Groceries,
                    total: 60.0
                },
                CategoryTotal {
                    category: Category::Transport,
                    total: 10.0
                },
            ]
        );
        assert!(totals.iter().all(|t| t.category != Category::Salary));
    }

    #[test]
    fn test_category_totals_sum_to_expenses() {
        let items = sample();
        let sum: f64 = compute_category_totals(&items).iter().map(|t| t.total).sum();
        assert!((sum - compute_kpis(&items).total_expenses).abs() < 1e-9);
    }

    #[test]
    fn test_category_ties_keep_first_seen_order() {
        let items = vec![
            debit("a", "2024-01-01", Category::Travel, 25.0),
            debit("b", "2024-01-01", Category::Groceries, 25.0),
            debit("c", "2024-01-01", Category::Utilities, 50.0),
        ];
        let order: Vec<Category> = compute_category_totals(&items)
            .into_iter()
            .map(|t| t.category)
            .collect();
        assert_eq!(
            order,
            vec![Category::Utilities, Category::Travel, Category::Groceries]
        );
    }

    #[test]
    fn test_top_categories_is_prefix() {
        let items: Vec<Transaction> = Category::all()
            .iter()
            .filter(|c| **c != Category::Salary)
            .enumerate()
            .map(|(i, c)| debit(&format!("tx-{}", i), "2024-01-01", *c, 10.0 * (i + 1) as f64))
            .collect();
        let totals = compute_category_totals(&items);
        assert_eq!(totals.len(), 7);

        let top = top_categories(&totals, 5);
        assert_eq!(top.len(), 5);
        assert_eq!(&totals[..5], &top[..]);
        assert!(top.windows(2).all(|w| w[0].total >= w[1].total));

        assert_eq!(top_categories(&totals[..2], 5).len(), 2);
        assert!(top_categories(&[], 5).is_empty());
    }

    #[test]
    fn test_trend_groups_by_day_ascending() {
        let trend = compute_trend(&sample(), 30);
        let dates: Vec<&str> = trend.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(dates, vec!["03-02", "03-03", "03-05"]);
        assert_eq!(trend[0].amount, 50.0);
        assert_eq!(trend[0].cumulative, 50.0);
        assert_eq!(trend[1].cumulative, 70.0);
        assert_eq!(trend[2].cumulative, 190.0);
        assert_eq!(
            trend[0].date,
            NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()
        );
    }

    #[test]
    fn test_trend_keeps_most_recent_window() {
        let items: Vec<Transaction> = (1..=40)
            .map(|d| {
                let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                    + chrono::Duration::days(d * 2);
                debit(
                    &format!("tx-{}", d),
                    &date.format("%Y-%m-%d").to_string(),
                    Category::Groceries,
                    1.0,
                )
            })
            .collect();

        let trend = compute_trend(&items, 30);
        assert_eq!(trend.len(), 30);
        // Last 30 of 40 distinct dates
        assert_eq!(trend[0].date, items[10].date);
        assert_eq!(trend[29].date, items[39].date);
        assert!(trend.windows(2).all(|w| w[0].cumulative <= w[1].cumulative));
        let sum: f64 = trend.iter().map(|p| p.amount).sum();
        assert_eq!(trend.last().unwrap().cumulative, sum);
    }

    #[test]
    fn test_trend_year_boundary_sorts_by_full_date() {
        let items = vec![
            debit("a", "2024-01-02", Category::Groceries, 5.0),
            debit("b", "2023-12-30", Category::Groceries, 7.0),
        ];
        let trend = compute_trend(&items, 30);
        assert_eq!(trend[0].label, "12-30");
        assert_eq!(trend[1].label, "01-02");
    }

    #[test]
    fn test_trend_zero_window_and_empty() {
        assert!(compute_trend(&sample(), 0).is_empty());
        assert!(compute_trend(&[], 30).is_empty());
    }

    #[test]
    fn test_anomalies() {
        let mut flagged = debit("tx-anomaly-1", "2024-03-04", Category::Shopping, 420.55);
        flagged.note = Some("Nuevo/alto".to_string());
        let small = debit("tx-small", "2024-03-04", Category::Groceries, 50.0);
        let big = debit("tx-big", "2024-03-01", Category::Travel, 300.01);
        let edge = debit("tx-edge", "2024-03-01", Category::Travel, 300.0);
        let mut noted = debit("tx-noted", "2024-03-01", Category::Groceries, 5.0);
        noted.note = Some("Revisar".to_string());
        let salary = credit("tx-salary", "2024-03-01", 1800.0);

        let items = vec![
            big.clone(),
            small,
            flagged.clone(),
            edge,
            noted.clone(),
            salary.clone(),
        ];
        let anomalies = detect_anomalies(&items, 300.0);
        assert_eq!(anomalies, vec![big, flagged, noted, salary]);
    }

    #[test]
    fn test_analyze_empty() {
        let analysis = analyze_transactions(&[]);
        assert_eq!(analysis, TransactionAnalysis::default());
    }

    #[test]
    fn test_analyze_uses_config() {
        let config = AnalyticsConfig {
            anomaly_threshold: 100.0,
            top_categories: 1,
            trend_window_days: 2,
        };
        let analysis = analyze_transactions_with_config(&sample(), &config);
        assert_eq!(analysis.top_categories.len(), 1);
        assert_eq!(analysis.trend.len(), 2);
        // Shopping 120 plus both salaries
        assert_eq!(analysis.anomalies.len(), 3);
        assert_eq!(analysis.category_totals.len(), 3);
    }

    #[test]
    fn test_order_independent() {
        let items = sample();
        let mut reversed = items.clone();
        reversed.reverse();
        assert_eq!(compute_kpis(&items), compute_kpis(&reversed));
        assert_eq!(compute_trend(&items, 30), compute_trend(&reversed, 30));
    }
}
