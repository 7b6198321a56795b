//! Domain models for FinTrack

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Spending categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Groceries,
    Transport,
    Subscriptions,
    #[serde(rename = "Eating Out")]
    EatingOut,
    Utilities,
    Salary,
    Travel,
    Shopping,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Groceries => "Groceries",
            Self::Transport => "Transport",
            Self::Subscriptions => "Subscriptions",
            Self::EatingOut => "Eating Out",
            Self::Utilities => "Utilities",
            Self::Salary => "Salary",
            Self::Travel => "Travel",
            Self::Shopping => "Shopping",
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Self::Groceries,
            Self::Transport,
            Self::Subscriptions,
            Self::EatingOut,
            Self::Utilities,
            Self::Salary,
            Self::Travel,
            Self::Shopping,
        ]
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace(['_', '-'], " ").as_str() {
            "groceries" => Ok(Self::Groceries),
            "transport" => Ok(Self::Transport),
            "subscriptions" => Ok(Self::Subscriptions),
            "eating out" => Ok(Self::EatingOut),
            "utilities" => Ok(Self::Utilities),
            "salary" => Ok(Self::Salary),
            "travel" => Ok(Self::Travel),
            "shopping" => Ok(Self::Shopping),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Direction of money movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Inflow, positive amount
    Credit,
    /// Outflow, negative amount
    Debit,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub merchant: String,
    pub category: Category,
    /// Negative = expense, positive = income
    pub amount: f64,
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    /// Present only on flagged records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Transaction {
    pub fn is_credit(&self) -> bool {
        self.tx_type == TransactionType::Credit
    }

    pub fn is_debit(&self) -> bool {
        self.tx_type == TransactionType::Debit
    }

    /// True when a non-empty note is attached
    pub fn has_note(&self) -> bool {
        self.note.as_deref().is_some_and(|n| !n.is_empty())
    }

    /// Check that the amount sign agrees with the transaction type
    pub fn validate(&self) -> Result<()> {
        let ok = match self.tx_type {
            TransactionType::Credit => self.amount > 0.0,
            TransactionType::Debit => self.amount < 0.0,
        };
        if ok {
            Ok(())
        } else {
            Err(Error::InvalidData(format!(
                "transaction {}: {} amount must be {}, got {}",
                self.id,
                self.tx_type,
                if self.is_credit() { "positive" } else { "negative" },
                self.amount
            )))
        }
    }
}

/// Validate every record in a set, failing on the first bad one
pub fn validate_transactions(items: &[Transaction]) -> Result<()> {
    items.iter().try_for_each(Transaction::validate)
}

/// Manipulation tactic detected in a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tactic {
    Urgency,
    Authority,
    Scarcity,
    RequestMoney,
    SuspiciousUrl,
}

impl Tactic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Urgency => "urgency",
            Self::Authority => "authority",
            Self::Scarcity => "scarcity",
            Self::RequestMoney => "request_money",
            Self::SuspiciousUrl => "suspicious_url",
        }
    }
}

impl std::fmt::Display for Tactic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classifier verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLabel {
    Legitimate,
    Uncertain,
    Manipulative,
}

impl RiskLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Legitimate => "legitimate",
            Self::Uncertain => "uncertain",
            Self::Manipulative => "manipulative",
        }
    }
}

impl std::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of scoring a message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// 0.0 - 1.0, two decimals
    pub risk_score: f64,
    pub label: RiskLabel,
    /// In detection order
    pub tactics_detected: Vec<Tactic>,
    pub rationale: String,
    pub recommendation: String,
}

/// Spend for one category (absolute value)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
}

/// One day of the spending trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    /// MM-DD display label
    pub label: String,
    /// Total debit magnitude for the day
    pub amount: f64,
    /// Running sum across the emitted window
    pub cumulative: f64,
}

/// Headline numbers for the dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
    /// Average expense per debit transaction
    pub avg_transaction: f64,
    pub transaction_count: usize,
    pub credit_count: usize,
    pub debit_count: usize,
}

/// Everything the dashboard shows for a transaction set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionAnalysis {
    pub kpis: KpiSummary,
    pub category_totals: Vec<CategoryTotal>,
    pub top_categories: Vec<CategoryTotal>,
    pub trend: Vec<TrendPoint>,
    pub anomalies: Vec<Transaction>,
}
