//! Export projection
//!
//! One flat row per normalized transaction, with no filtering by type.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::Transaction;
use crate::reports::{EmptyReason, Outcome};

/// A flat `date,type,category,amount` row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub amount: f64,
}

impl From<&Transaction> for ExportRow {
    fn from(txn: &Transaction) -> Self {
        Self {
            date: txn.date,
            kind: txn.kind.clone(),
            category: txn.category.clone(),
            amount: txn.amount,
        }
    }
}

/// Project transactions into export rows, keeping their order
///
/// Returns `Empty(NoTransactions)` when there is nothing to export, so
/// callers never write a header-only file.
pub fn export_rows(records: &[Transaction]) -> Outcome<Vec<ExportRow>> {
    if records.is_empty() {
        return Outcome::Empty(EmptyReason::NoTransactions);
    }

    Outcome::Data(records.iter().map(ExportRow::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(date: &str, kind: &str, category: &str, amount: f64) -> Transaction {
        Transaction::new(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            kind,
            category,
            amount,
        )
    }

    #[test]
    fn test_rows_keep_order_and_all_types() {
        let records = vec![
            txn("2024-02-01", "expense", "rent", 1000.0),
            txn("2024-01-05", "income", "salary", 5000.0),
            txn("2024-01-06", "transfer", "savings", 300.0),
        ];

        let rows = export_rows(&records).into_data().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].category, "rent");
        assert_eq!(rows[1].kind, "income");
        assert_eq!(rows[2].kind, "transfer");
        assert_eq!(rows[2].amount, 300.0);
    }

    #[test]
    fn test_nothing_to_export() {
        assert_eq!(export_rows(&[]), Outcome::Empty(EmptyReason::NoTransactions));
    }
}
