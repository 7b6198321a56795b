//! Transaction set storage
//!
//! The current transaction set lives as one JSON array under
//! [`TRANSACTIONS_KEY`]. Reads use get-or-generate semantics: an empty store
//! is seeded with demo data on first use.

use tracing::{debug, info};

use super::Database;
use crate::demo;
use crate::error::Result;
use crate::models::{validate_transactions, Transaction};

/// Fixed key for the current transaction set
pub const TRANSACTIONS_KEY: &str = "fintrack.transactions.v1";

impl Database {
    /// Load the stored transaction set, if any
    pub fn load_transactions(&self) -> Result<Option<Vec<Transaction>>> {
        match self.kv_get(TRANSACTIONS_KEY)? {
            Some(raw) => {
                let items: Vec<Transaction> = serde_json::from_str(&raw)?;
                debug!(count = items.len(), "Loaded transactions");
                Ok(Some(items))
            }
            None => Ok(None),
        }
    }

    /// Replace the stored transaction set. Rejects records whose amount sign
    /// disagrees with their type.
    pub fn save_transactions(&self, items: &[Transaction]) -> Result<()> {
        validate_transactions(items)?;
        let raw = serde_json::to_string(items)?;
        self.kv_put(TRANSACTIONS_KEY, &raw)?;
        debug!(count = items.len(), "Saved transactions");
        Ok(())
    }

    /// Load the stored set, generating and persisting one with `generate`
    /// when the store is empty
    pub fn load_or_seed_transactions_with<F>(&self, generate: F) -> Result<Vec<Transaction>>
    where
        F: FnOnce() -> Vec<Transaction>,
    {
        if let Some(items) = self.load_transactions()? {
            return Ok(items);
        }

        let items = generate();
        self.save_transactions(&items)?;
        info!(count = items.len(), "Seeded empty store with demo transactions");
        Ok(items)
    }

    /// Load the stored set, seeding demo data when the store is empty
    pub fn load_or_seed_transactions(&self) -> Result<Vec<Transaction>> {
        self.load_or_seed_transactions_with(demo::generate_default)
    }

    /// Replace the stored set with freshly generated demo data
    pub fn reseed_transactions(&self) -> Result<Vec<Transaction>> {
        let items = demo::generate_default();
        self.save_transactions(&items)?;
        info!(count = items.len(), "Regenerated demo transactions");
        Ok(items)
    }
}
