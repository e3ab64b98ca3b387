//! Expense Trend
//!
//! Expense totals per calendar day, in date order.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::{EmptyReason, Outcome};
use crate::display::report::{format_amount, format_bar, separator};
use crate::models::Transaction;

/// Expense totals keyed by date, ascending
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DailyTrend {
    points: BTreeMap<NaiveDate, f64>,
}

impl DailyTrend {
    /// Total for one day
    pub fn get(&self, date: NaiveDate) -> Option<f64> {
        self.points.get(&date).copied()
    }

    /// Number of days with expenses
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Days and totals, earliest first
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.points.iter().map(|(d, v)| (*d, *v))
    }

    /// First and last day in the series
    pub fn range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.points.keys().next()?;
        let last = self.points.keys().next_back()?;
        Some((*first, *last))
    }

    /// Format the series for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();
        let max = self.points.values().copied().fold(0.0, f64::max);

        output.push_str("Expense Trend Over Time");
        if let Some((first, last)) = self.range() {
            output.push_str(&format!(": {} to {}", first, last));
        }
        output.push('\n');
        output.push_str(&separator(64));
        output.push('\n');

        for (date, amount) in self.iter() {
            output.push_str(&format!(
                "{} {:>14} {}\n",
                date.format("%Y-%m-%d"),
                format_amount(amount, currency),
                format_bar(amount, max, 36)
            ));
        }

        output
    }
}

/// Sum expense amounts per day
///
/// Returns `Empty(NoExpenses)` when no record is an expense.
pub fn daily_trend(records: &[Transaction]) -> Outcome<DailyTrend> {
    let mut points: BTreeMap<NaiveDate, f64> = BTreeMap::new();

    for txn in records.iter().filter(|t| t.is_expense()) {
        *points.entry(txn.date).or_insert(0.0) += txn.amount;
    }

    if points.is_empty() {
        return Outcome::Empty(EmptyReason::NoExpenses);
    }

    Outcome::Data(DailyTrend { points })
}
