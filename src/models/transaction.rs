//! Transaction models
//!
//! `Transaction` is the canonical, normalized form the reports work on.
//! `NewTransaction` is validated user input on its way into the store, and
//! `StoredTransaction` is the full row shown by listings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::raw::RawValue;
use crate::error::{TrackerError, TrackerResult};

/// Type label counted as income
pub const INCOME: &str = "income";

/// Type label counted as expense
pub const EXPENSE: &str = "expense";

/// Largest accepted amount magnitude
///
/// Keeps any sum of accepted amounts finite.
pub const MAX_AMOUNT: f64 = 1e15;

/// Date format used for entry and storage
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// The two transaction types accepted on input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
}

impl TransactionType {
    /// The label stored in the `type` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => INCOME,
            Self::Expense => EXPENSE,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            INCOME => Ok(Self::Income),
            EXPENSE => Ok(Self::Expense),
            other => Err(TrackerError::Validation(format!(
                "Type must be 'income' or 'expense', got '{}'.",
                other
            ))),
        }
    }
}

/// A normalized transaction
///
/// `kind` is kept as the stored label rather than [`TransactionType`]: rows
/// with other labels survive normalization and show up in exports, they just
/// never count as income or expense.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub amount: f64,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        date: NaiveDate,
        kind: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            date,
            kind: kind.into(),
            category: category.into(),
            amount,
        }
    }

    /// Check if this transaction counts as income
    pub fn is_income(&self) -> bool {
        self.kind == INCOME
    }

    /// Check if this transaction counts as an expense
    pub fn is_expense(&self) -> bool {
        self.kind == EXPENSE
    }
}

/// Validated input for a new transaction
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub kind: TransactionType,
    pub category: String,
    pub amount: f64,
    pub description: String,
}

impl NewTransaction {
    /// Create a new transaction from typed values
    ///
    /// Category and description are trimmed and must not be empty; the amount
    /// must be a finite number greater than zero.
    pub fn new(
        date: NaiveDate,
        kind: TransactionType,
        category: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
    ) -> TrackerResult<Self> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(TrackerError::Validation(
                "Amount must be a positive number.".into(),
            ));
        }
        if amount > MAX_AMOUNT {
            return Err(TrackerError::Validation(format!(
                "Amount must not exceed {}.",
                MAX_AMOUNT
            )));
        }

        let category = category.into().trim().to_string();
        if category.is_empty() {
            return Err(TrackerError::Validation("Category cannot be empty.".into()));
        }

        let description = description.into().trim().to_string();
        if description.is_empty() {
            return Err(TrackerError::Validation(
                "Description cannot be empty.".into(),
            ));
        }

        Ok(Self {
            date,
            kind,
            category,
            amount,
            description,
        })
    }

    /// Parse a new transaction from form-style text input, reading the date
    /// with a chrono format string
    pub fn parse_with_format(
        date: &str,
        date_format: &str,
        kind: &str,
        category: &str,
        amount: &str,
        description: &str,
    ) -> TrackerResult<Self> {
        let date = NaiveDate::parse_from_str(date.trim(), date_format).map_err(|_| {
            if date_format == ISO_DATE_FORMAT {
                TrackerError::Validation("Invalid Date format. Must be YYYY-MM-DD.".into())
            } else {
                TrackerError::Validation(format!(
                    "Invalid Date format. Must match '{}'.",
                    date_format
                ))
            }
        })?;

        let kind: TransactionType = kind.trim().parse()?;

        let amount = amount.trim();
        if amount.is_empty() {
            return Err(TrackerError::Validation("Amount cannot be empty.".into()));
        }
        let amount: f64 = amount
            .parse()
            .map_err(|_| TrackerError::Validation(format!("Amount is not a number: {}", amount)))?;

        Self::new(date, kind, category, amount, description)
    }
}

/// A full stored row, as returned by `fetch_ordered`
///
/// Date and amount stay raw so that malformed rows can still be listed and
/// deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredTransaction {
    pub id: i64,
    pub date: RawValue,
    pub kind: String,
    pub category: String,
    pub amount: RawValue,
    pub description: String,
}
