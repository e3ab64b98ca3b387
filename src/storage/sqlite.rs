//! SQLite transaction store
//!
//! One `transactions` table. The data columns carry no constraints and SQLite
//! keeps whatever value was written, so a row may hold text in `amount` or a
//! number in `date`. Reads hand those values back untouched as [`RawValue`]s.

use std::path::Path;
use std::time::Duration;

use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, Row};

use super::TransactionStore;
use crate::config::DatabaseConfig;
use crate::error::TrackerResult;
use crate::models::{NewTransaction, RawRecord, RawValue, StoredTransaction};

/// SQLite-backed [`TransactionStore`]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (and create if needed) the database at `path`
    pub fn open(path: impl AsRef<Path>, config: &DatabaseConfig) -> TrackerResult<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "opening transaction database");

        let conn = Connection::open(path)?;
        conn.busy_timeout(Duration::from_millis(config.busy_timeout_ms))?;
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| {
            row.get::<_, String>(0)
        })?;

        setup_database(&conn)?;
        Ok(Self { conn })
    }

    /// Open a fresh in-memory database
    pub fn open_in_memory() -> TrackerResult<Self> {
        let conn = Connection::open_in_memory()?;
        setup_database(&conn)?;
        Ok(Self { conn })
    }

    /// Borrow the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Number of stored rows, valid or not
    pub fn count(&self) -> TrackerResult<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM transactions", [], |row| row.get(0))?;
        Ok(count)
    }
}

fn setup_database(conn: &Connection) -> TrackerResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT,
            type TEXT,
            category TEXT,
            amount REAL,
            description TEXT NOT NULL DEFAULT ''
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date)",
        [],
    )?;

    Ok(())
}

fn raw_value(value: ValueRef<'_>) -> RawValue {
    match value {
        ValueRef::Null => RawValue::Null,
        ValueRef::Integer(n) => RawValue::Integer(n),
        ValueRef::Real(r) => RawValue::Real(r),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => match std::str::from_utf8(bytes) {
            Ok(s) => RawValue::Text(s.to_string()),
            Err(_) => RawValue::Null,
        },
    }
}

fn column(row: &Row<'_>, idx: usize) -> rusqlite::Result<RawValue> {
    Ok(raw_value(row.get_ref(idx)?))
}

impl TransactionStore for SqliteStore {
    fn fetch_all(&self) -> TrackerResult<Vec<RawRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT date, type, category, amount FROM transactions ORDER BY id")?;

        let records = stmt
            .query_map([], |row| {
                Ok(RawRecord {
                    date: column(row, 0)?,
                    kind: column(row, 1)?,
                    category: column(row, 2)?,
                    amount: column(row, 3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(count = records.len(), "fetched raw records");
        Ok(records)
    }

    fn fetch_ordered(&self) -> TrackerResult<Vec<StoredTransaction>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, type, category, amount, description
             FROM transactions
             ORDER BY date DESC, id DESC",
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok(StoredTransaction {
                    id: row.get(0)?,
                    date: column(row, 1)?,
                    kind: column(row, 2)?.to_string(),
                    category: column(row, 3)?.to_string(),
                    amount: column(row, 4)?,
                    description: column(row, 5)?.to_string(),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    fn insert(&self, txn: &NewTransaction) -> TrackerResult<i64> {
        self.conn.execute(
            "INSERT INTO transactions (date, type, category, amount, description)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                txn.date.format("%Y-%m-%d").to_string(),
                txn.kind.as_str(),
                txn.category,
                txn.amount,
                txn.description,
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        tracing::info!(id, kind = %txn.kind, category = %txn.category, "inserted transaction");
        Ok(id)
    }

    fn delete(&self, id: i64) -> TrackerResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM transactions WHERE id = ?1", params![id])?;

        tracing::info!(id, removed, "deleted transaction");
        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn new_txn(date: &str, kind: TransactionType, category: &str, amount: f64) -> NewTransaction {
        NewTransaction::new(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            kind,
            category,
            amount,
            "test",
        )
        .unwrap()
    }

    #[test]
    fn test_insert_and_fetch_all_in_storage_order() {
        let store = SqliteStore::open_in_memory().unwrap();
        store
            .insert(&new_txn("2024-02-01", TransactionType::Expense, "rent", 1000.0))
            .unwrap();
        store
            .insert(&new_txn("2024-01-05", TransactionType::Income, "salary", 5000.0))
            .unwrap();

        let records = store.fetch_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, RawValue::from("2024-02-01"));
        assert_eq!(records[0].kind, RawValue::from("expense"));
        assert_eq!(records[0].amount, RawValue::Real(1000.0));
        assert_eq!(records[1].category, RawValue::from("salary"));
    }

    #[test]
    fn test_fetch_ordered_newest_first() {
        let store = SqliteStore::open_in_memory().unwrap();
        store
            .insert(&new_txn("2024-01-05", TransactionType::Income, "salary", 5000.0))
            .unwrap();
        store
            .insert(&new_txn("2024-02-01", TransactionType::Expense, "rent", 1000.0))
            .unwrap();
        store
            .insert(&new_txn("2024-01-10", TransactionType::Expense, "food", 200.0))
            .unwrap();

        let rows = store.fetch_ordered().unwrap();
        let dates: Vec<String> = rows.iter().map(|r| r.date.to_string()).collect();
        assert_eq!(dates, vec!["2024-02-01", "2024-01-10", "2024-01-05"]);
        assert_eq!(rows[0].description, "test");
        assert_eq!(rows[0].kind, "expense");
    }

    #[test]
    fn test_malformed_values_come_back_raw() {
        let store = SqliteStore::open_in_memory().unwrap();
        store
            .connection()
            .execute(
                "INSERT INTO transactions (date, type, category, amount) VALUES (?1, ?2, ?3, ?4)",
                params!["not a date", "expense", "food", "abc"],
            )
            .unwrap();
        store
            .connection()
            .execute(
                "INSERT INTO transactions (date, type, category, amount) VALUES (NULL, 'income', NULL, '42')",
                [],
            )
            .unwrap();

        let records = store.fetch_all().unwrap();
        assert_eq!(records[0].date, RawValue::from("not a date"));
        assert_eq!(records[0].amount, RawValue::from("abc"));
        assert_eq!(records[1].date, RawValue::Null);
        assert_eq!(records[1].category, RawValue::Null);
        // REAL affinity converts numeric text on write
        assert_eq!(records[1].amount, RawValue::Real(42.0));

        let listed = store.fetch_ordered().unwrap();
        assert_eq!(listed.len(), 2);
    }

    #[test]
    fn test_delete() {
        let store = SqliteStore::open_in_memory().unwrap();
        let id = store
            .insert(&new_txn("2024-01-10", TransactionType::Expense, "food", 200.0))
            .unwrap();

        assert!(store.delete(id).unwrap());
        assert!(!store.delete(id).unwrap());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_open_file_database_persists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.db");
        let config = DatabaseConfig::default();

        {
            let store = SqliteStore::open(&path, &config).unwrap();
            store
                .insert(&new_txn("2024-01-10", TransactionType::Expense, "food", 200.0))
                .unwrap();
        }

        let store = SqliteStore::open(&path, &config).unwrap();
        assert_eq!(store.count().unwrap(), 1);
    }
}
