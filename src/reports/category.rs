//! Category Report
//!
//! Expense totals grouped by category label.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{EmptyReason, Outcome};
use crate::display::report::{format_amount, format_bar, format_percentage, separator, truncate};
use crate::models::Transaction;

/// Expense totals keyed by category
///
/// Labels are compared exactly, so "Food" and "food" are separate groups.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CategoryTotals {
    totals: BTreeMap<String, f64>,
}

impl CategoryTotals {
    /// Total for one category
    pub fn get(&self, category: &str) -> Option<f64> {
        self.totals.get(category).copied()
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Categories and totals, ordered by label
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.totals.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Sum over all categories
    pub fn total(&self) -> f64 {
        self.totals.values().sum()
    }

    /// Each category's percentage of the total
    pub fn shares(&self) -> Vec<(&str, f64)> {
        let total = self.total();
        self.iter()
            .map(|(category, amount)| {
                let pct = if total == 0.0 {
                    0.0
                } else {
                    amount / total * 100.0
                };
                (category, pct)
            })
            .collect()
    }

    /// Format the breakdown for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();
        let max = self.totals.values().copied().fold(0.0, f64::max);

        output.push_str("Expense Distribution by Category\n");
        output.push_str(&separator(72));
        output.push('\n');

        for (category, pct) in self.shares() {
            let amount = self.totals[category];
            output.push_str(&format!(
                "{:<20} {:>14} {:>7} {}\n",
                truncate(category, 20),
                format_amount(amount, currency),
                format_percentage(pct),
                format_bar(amount, max, 24)
            ));
        }

        output.push_str(&separator(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>14}\n",
            "TOTAL",
            format_amount(self.total(), currency)
        ));

        output
    }
}

/// Sum expense amounts per category
///
/// Returns `Empty(NoExpenses)` when no record is an expense.
pub fn category_totals(records: &[Transaction]) -> Outcome<CategoryTotals> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();

    for txn in records.iter().filter(|t| t.is_expense()) {
        *totals.entry(txn.category.clone()).or_insert(0.0) += txn.amount;
    }

    if totals.is_empty() {
        return Outcome::Empty(EmptyReason::NoExpenses);
    }

    Outcome::Data(CategoryTotals { totals })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn txn(date: &str, kind: &str, category: &str, amount: f64) -> Transaction {
        Transaction::new(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            kind,
            category,
            amount,
        )
    }

    #[test]
    fn test_category_totals() {
        let records = vec![
            txn("2024-01-05", "income", "salary", 5000.0),
            txn("2024-01-10", "expense", "food", 200.0),
            txn("2024-02-01", "expense", "rent", 1000.0),
        ];

        let totals = category_totals(&records).into_data().unwrap();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals.get("food"), Some(200.0));
        assert_eq!(totals.get("rent"), Some(1000.0));
        assert_eq!(totals.get("salary"), None);
        assert_eq!(totals.total(), 1200.0);
    }

    #[test]
    fn test_groups_are_exact_and_summed() {
        let records = vec![
            txn("2024-01-10", "expense", "food", 200.0),
            txn("2024-01-11", "expense", "Food", 5.0),
            txn("2024-01-12", "expense", "food ", 7.0),
            txn("2024-01-13", "expense", "food", 50.0),
        ];

        let totals = category_totals(&records).into_data().unwrap();
        assert_eq!(totals.len(), 3);
        assert_eq!(totals.get("food"), Some(250.0));
        assert_eq!(totals.get("Food"), Some(5.0));
        assert_eq!(totals.get("food "), Some(7.0));
    }

    #[test]
    fn test_no_expenses_is_distinguished() {
        let records = vec![
            txn("2024-01-05", "income", "salary", 5000.0),
            txn("2024-01-06", "transfer", "savings", 100.0),
        ];
        assert_eq!(
            category_totals(&records),
            Outcome::Empty(EmptyReason::NoExpenses)
        );
        assert_eq!(category_totals(&[]), Outcome::Empty(EmptyReason::NoExpenses));
    }

    #[test]
    fn test_shares() {
        let records = vec![
            txn("2024-01-10", "expense", "food", 250.0),
            txn("2024-01-11", "expense", "rent", 750.0),
        ];

        let totals = category_totals(&records).into_data().unwrap();
        assert_eq!(totals.shares(), vec![("food", 25.0), ("rent", 75.0)]);
    }

    #[test]
    fn test_idempotent_and_ordered() {
        let records = vec![
            txn("2024-01-10", "expense", "zoo", 1.0),
            txn("2024-01-10", "expense", "art", 2.0),
        ];

        let first = category_totals(&records);
        assert_eq!(first, category_totals(&records));
        let totals = first.into_data().unwrap();
        let labels: Vec<&str> = totals.iter().map(|(c, _)| c).collect();
        assert_eq!(labels, vec!["art", "zoo"]);
    }

    #[test]
    fn test_format_terminal() {
        let records = vec![txn("2024-01-10", "expense", "food", 200.0)];
        let output = category_totals(&records)
            .into_data()
            .unwrap()
            .format_terminal("$");
        assert!(output.contains("food"));
        assert!(output.contains("$ 200.00"));
        assert!(output.contains("100%"));
    }
}
