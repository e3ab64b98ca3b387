//! Expense Tracker - income and expense records with monthly reporting
//!
//! This library records personal income and expense transactions in SQLite
//! and derives read-only reports from them: monthly income/expense/savings,
//! expense totals by category, a daily expense trend, a monthly expense
//! series, and a flat CSV export.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Raw records, canonical transactions and periods
//! - `storage`: The `TransactionStore` trait and its SQLite implementation
//! - `services`: Record normalization and the report/transaction services
//! - `reports`: The aggregation engine
//! - `export`: The export projection and CSV writer
//! - `display`, `cli`: Terminal presentation
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::models::YearMonth;
//! use expense_tracker::services::ReportService;
//! use expense_tracker::storage::SqliteStore;
//!
//! let store = SqliteStore::open_in_memory()?;
//! let summary = ReportService::new(&store).monthly_summary(YearMonth::new(2024, 1)?)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
