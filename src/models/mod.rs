//! Core data models for the expense tracker
//!
//! Raw storage records, the normalized transaction, validated input, and the
//! calendar month used to scope reports.

pub mod period;
pub mod raw;
pub mod transaction;

pub use period::YearMonth;
pub use raw::{RawRecord, RawValue};
pub use transaction::{
    NewTransaction, StoredTransaction, Transaction, TransactionType, EXPENSE, INCOME, MAX_AMOUNT,
};
