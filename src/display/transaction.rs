//! Transaction display formatting

use super::report::{separator, truncate};
use crate::models::{RawValue, StoredTransaction};

/// Format a single stored transaction as a register row
pub fn format_transaction_row(txn: &StoredTransaction, currency: &str) -> String {
    let amount = match &txn.amount {
        RawValue::Integer(n) => format!("{} {:.2}", currency, *n as f64),
        RawValue::Real(r) => format!("{} {:.2}", currency, r),
        other => cell(other),
    };

    format!(
        "{:>5} {:10} {:8} {:15} {:>14} {}",
        txn.id,
        truncate(&cell(&txn.date), 10),
        truncate(&txn.kind, 8),
        truncate(&txn.category, 15),
        amount,
        truncate(&txn.description, 30)
    )
}

fn cell(value: &RawValue) -> String {
    if value.is_null() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

/// Format a list of stored transactions as a register
pub fn format_transaction_list(transactions: &[StoredTransaction], currency: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>5} {:10} {:8} {:15} {:>14} {}\n",
        "ID", "Date", "Type", "Category", "Amount", "Description"
    ));
    output.push_str(&separator(86));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, currency));
        output.push('\n');
    }

    output
}
