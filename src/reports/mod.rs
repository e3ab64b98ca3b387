//! Reports module for the expense tracker
//!
//! The aggregation engine. Every report is a pure function over normalized
//! [`crate::models::Transaction`]s and returns an [`Outcome`]: either the
//! computed value or a reason why there was nothing to compute. A report that
//! sums to zero is still `Data`.

pub mod category;
pub mod monthly_expenses;
pub mod monthly_summary;
pub mod trend;

pub use category::{category_totals, CategoryTotals};
pub use monthly_expenses::{monthly_expenses, MonthlyExpenses};
pub use monthly_summary::{monthly_summary, MonthlySummary};
pub use trend::{daily_trend, DailyTrend};

use std::fmt;

use crate::models::YearMonth;

/// Why a report has no value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// There were no transactions at all
    NoTransactions,
    /// There were transactions, none in the requested month
    NoTransactionsInPeriod(YearMonth),
    /// There were transactions, none of them expenses
    NoExpenses,
}

impl fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTransactions => write!(f, "No transactions found."),
            Self::NoTransactionsInPeriod(period) => {
                write!(f, "No data for {}.", period.label())
            }
            Self::NoExpenses => write!(f, "No expense data available."),
        }
    }
}

/// Result of an aggregation
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The computed report
    Data(T),
    /// Nothing to report
    Empty(EmptyReason),
}

impl<T> Outcome<T> {
    /// Check if there is nothing to report
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty(_))
    }

    /// Take the report, if any
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Data(value) => Some(value),
            Self::Empty(_) => None,
        }
    }
}
