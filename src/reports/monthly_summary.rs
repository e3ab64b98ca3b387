//! Monthly Summary
//!
//! Income, expense and savings totals for one calendar month.

use serde::Serialize;

use super::{EmptyReason, Outcome};
use crate::display::report::{format_amount, separator};
use crate::models::{Transaction, YearMonth};

/// Totals for a single month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    /// The month summarized
    pub period: YearMonth,
    /// Sum of `income` amounts
    pub income: f64,
    /// Sum of `expense` amounts
    pub expense: f64,
    /// `income - expense`
    pub savings: f64,
    /// Transactions dated in the month, of any type
    pub transaction_count: usize,
}

impl MonthlySummary {
    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Monthly Summary: {}\n", self.period.label()));
        output.push_str(&separator(40));
        output.push('\n');
        output.push_str(&format!(
            "Total Income  : {}\n",
            format_amount(self.income, currency)
        ));
        output.push_str(&format!(
            "Total Expense : {}\n",
            format_amount(self.expense, currency)
        ));
        output.push_str(&format!(
            "Savings       : {}\n",
            format_amount(self.savings, currency)
        ));
        output.push_str(&format!("Transactions  : {}\n", self.transaction_count));

        output
    }
}

/// Summarize the transactions dated in `period`
///
/// Only the `income` and `expense` labels contribute to the sums. Returns
/// `Empty` when there are no transactions at all, or none in the month.
pub fn monthly_summary(records: &[Transaction], period: YearMonth) -> Outcome<MonthlySummary> {
    if records.is_empty() {
        return Outcome::Empty(EmptyReason::NoTransactions);
    }

    let mut income = 0.0;
    let mut expense = 0.0;
    let mut transaction_count = 0;

    for txn in records.iter().filter(|t| period.contains(t.date)) {
        transaction_count += 1;
        if txn.is_income() {
            income += txn.amount;
        } else if txn.is_expense() {
            expense += txn.amount;
        }
    }

    if transaction_count == 0 {
        return Outcome::Empty(EmptyReason::NoTransactionsInPeriod(period));
    }

    Outcome::Data(MonthlySummary {
        period,
        income,
        expense,
        savings: income - expense,
        transaction_count,
    })
}
