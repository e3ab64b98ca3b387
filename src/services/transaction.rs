//! Transaction service
//!
//! Recording, listing and deleting transactions. Input is validated by
//! [`NewTransaction`] before it reaches this layer.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{NewTransaction, StoredTransaction};
use crate::storage::TransactionStore;

/// Service for transaction management
pub struct TransactionService<'a> {
    store: &'a dyn TransactionStore,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(store: &'a dyn TransactionStore) -> Self {
        Self { store }
    }

    /// Record a transaction, returning its id
    pub fn add(&self, txn: &NewTransaction) -> TrackerResult<i64> {
        self.store.insert(txn)
    }

    /// List stored transactions, newest first
    ///
    /// With a limit, only the first `limit` rows are returned.
    pub fn list(&self, limit: Option<usize>) -> TrackerResult<Vec<StoredTransaction>> {
        let mut rows = self.store.fetch_ordered()?;
        if let Some(limit) = limit {
            rows.truncate(limit);
        }
        Ok(rows)
    }

    /// Delete a transaction by id
    pub fn delete(&self, id: i64) -> TrackerResult<()> {
        if self.store.delete(id)? {
            Ok(())
        } else {
            Err(TrackerError::transaction_not_found(id.to_string()))
        }
    }
}
