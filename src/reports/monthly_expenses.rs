//! Monthly Expenses
//!
//! Expense totals per calendar month, in month order.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{EmptyReason, Outcome};
use crate::display::report::{format_amount, format_bar, separator};
use crate::models::{Transaction, YearMonth};

/// Expense totals keyed by month, ascending
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MonthlyExpenses {
    months: BTreeMap<YearMonth, f64>,
}

impl MonthlyExpenses {
    /// Total for one month
    pub fn get(&self, period: YearMonth) -> Option<f64> {
        self.months.get(&period).copied()
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Months and totals, earliest first
    pub fn iter(&self) -> impl Iterator<Item = (YearMonth, f64)> + '_ {
        self.months.iter().map(|(m, v)| (*m, *v))
    }

    /// Format the series for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();
        let max = self.months.values().copied().fold(0.0, f64::max);

        output.push_str("Monthly Expenses\n");
        output.push_str(&separator(64));
        output.push('\n');

        for (period, amount) in self.iter() {
            output.push_str(&format!(
                "{} {:>14} {}\n",
                period,
                format_amount(amount, currency),
                format_bar(amount, max, 38)
            ));
        }

        output
    }
}

/// Sum expense amounts per month
///
/// Returns `Empty(NoExpenses)` when no record is an expense.
pub fn monthly_expenses(records: &[Transaction]) -> Outcome<MonthlyExpenses> {
    let mut months: BTreeMap<YearMonth, f64> = BTreeMap::new();

    for txn in records.iter().filter(|t| t.is_expense()) {
        *months.entry(YearMonth::from_date(txn.date)).or_insert(0.0) += txn.amount;
    }

    if months.is_empty() {
        return Outcome::Empty(EmptyReason::NoExpenses);
    }

    Outcome::Data(MonthlyExpenses { months })
}
