//! Report configuration and grouping models

use chrono::NaiveDate;

use crate::api::mercury::models::{ListTransactionsParams, Transaction};

/// Resolved configuration for the `balances` subcommand.
#[derive(Debug, Clone)]
pub struct BalancesConfig {
    pub api_key: String,
    /// Account IDs to include; empty means all accounts.
    pub accounts: Vec<String>,
}

/// Resolved configuration for the `spend` and `revenue` subcommands.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub api_key: String,
    /// Account IDs to include; empty means all accounts.
    pub accounts: Vec<String>,
    /// Counterparty names to include; empty means all counterparties.
    pub counterparties: Vec<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub aggregate: Aggregate,
}

impl ReportConfig {
    /// Query parameters for this report's transaction fetches.
    pub fn transaction_params(&self) -> ListTransactionsParams {
        ListTransactionsParams {
            start: self.start_date,
            end: self.end_date,
            ..ListTransactionsParams::default()
        }
    }
}

/// Which side of the ledger a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Money leaving the accounts (negative amounts).
    Spend,
    /// Money entering the accounts (positive amounts).
    Revenue,
}

impl Direction {
    /// Sign predicate. Zero-amount transactions match neither direction.
    pub fn matches(self, amount: f64) -> bool {
        match self {
            Direction::Spend => amount < 0.0,
            Direction::Revenue => amount > 0.0,
        }
    }
}

/// How report rows are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Aggregate {
    /// One row per counterparty
    Counterparty,
    /// One row per UTC calendar day
    Day,
    /// One row per UTC calendar month
    Month,
    /// One row per UTC calendar year
    Year,
}

impl Aggregate {
    /// Grouping key for a transaction. Calendar buckets come from
    /// `createdAt`, the one timestamp present on every transaction.
    pub fn key(self, txn: &Transaction) -> String {
        match self {
            Aggregate::Counterparty => txn.counterparty_name.clone(),
            Aggregate::Day => txn.created_at.format("%Y-%m-%d").to_string(),
            Aggregate::Month => txn.created_at.format("%Y-%m").to_string(),
            Aggregate::Year => txn.created_at.format("%Y").to_string(),
        }
    }

    /// Column label for rendered reports.
    pub fn label(self) -> &'static str {
        match self {
            Aggregate::Counterparty => "Counterparty",
            Aggregate::Day => "Day",
            Aggregate::Month => "Month",
            Aggregate::Year => "Year",
        }
    }
}
