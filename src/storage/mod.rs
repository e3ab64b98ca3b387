//! Storage layer for the expense tracker
//!
//! The reports only ever see storage through [`TransactionStore`]. The shipped
//! implementation is a single-table SQLite database.

pub mod sqlite;

pub use sqlite::SqliteStore;

use crate::error::TrackerResult;
use crate::models::{NewTransaction, RawRecord, StoredTransaction};

/// The storage collaborator consumed by the services
///
/// Failures are reported as a single opaque [`crate::error::TrackerError::Storage`];
/// callers do not retry.
pub trait TransactionStore {
    /// All `(date, type, category, amount)` records in storage order
    fn fetch_all(&self) -> TrackerResult<Vec<RawRecord>>;

    /// All full rows, newest date first
    fn fetch_ordered(&self) -> TrackerResult<Vec<StoredTransaction>>;

    /// Persist a new transaction, returning its id
    fn insert(&self, txn: &NewTransaction) -> TrackerResult<i64>;

    /// Remove a transaction; returns whether a row was deleted
    fn delete(&self, id: i64) -> TrackerResult<bool>;
}

impl<S: TransactionStore + ?Sized> TransactionStore for &S {
    fn fetch_all(&self) -> TrackerResult<Vec<RawRecord>> {
        (**self).fetch_all()
    }

    fn fetch_ordered(&self) -> TrackerResult<Vec<StoredTransaction>> {
        (**self).fetch_ordered()
    }

    fn insert(&self, txn: &NewTransaction) -> TrackerResult<i64> {
        (**self).insert(txn)
    }

    fn delete(&self, id: i64) -> TrackerResult<bool> {
        (**self).delete(id)
    }
}
