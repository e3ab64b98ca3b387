//! Report service
//!
//! Wires a store to the normalizer and the reports. Every call fetches the
//! full record set again and recomputes; nothing is cached between calls.

use std::path::Path;

use super::normalize::normalize_with_report;
use crate::error::TrackerResult;
use crate::export::{export_rows, export_rows_to_file, ExportRow};
use crate::models::{Transaction, YearMonth};
use crate::reports::{
    category_totals, daily_trend, monthly_expenses, monthly_summary, CategoryTotals, DailyTrend,
    MonthlyExpenses, MonthlySummary, Outcome,
};
use crate::storage::TransactionStore;

/// Service for generating reports from stored transactions
pub struct ReportService<'a> {
    store: &'a dyn TransactionStore,
}

impl<'a> ReportService<'a> {
    /// Create a new report service
    pub fn new(store: &'a dyn TransactionStore) -> Self {
        Self { store }
    }

    /// Fetch and normalize every stored record
    ///
    /// Storage failures are returned unchanged.
    pub fn load_transactions(&self) -> TrackerResult<Vec<Transaction>> {
        let raw = self.store.fetch_all()?;
        let (transactions, report) = normalize_with_report(&raw);
        if report.discarded() > 0 {
            tracing::info!(
                discarded = report.discarded(),
                kept = report.kept,
                total = report.total,
                "skipped malformed records"
            );
        }
        Ok(transactions)
    }

    /// Income, expense and savings for one month
    pub fn monthly_summary(&self, period: YearMonth) -> TrackerResult<Outcome<MonthlySummary>> {
        Ok(monthly_summary(&self.load_transactions()?, period))
    }

    /// Expense totals by category
    pub fn category_totals(&self) -> TrackerResult<Outcome<CategoryTotals>> {
        Ok(category_totals(&self.load_transactions()?))
    }

    /// Expense totals by day
    pub fn daily_trend(&self) -> TrackerResult<Outcome<DailyTrend>> {
        Ok(daily_trend(&self.load_transactions()?))
    }

    /// Expense totals by month
    pub fn monthly_expenses(&self) -> TrackerResult<Outcome<MonthlyExpenses>> {
        Ok(monthly_expenses(&self.load_transactions()?))
    }

    /// Flat export rows in storage order
    pub fn export_rows(&self) -> TrackerResult<Outcome<Vec<ExportRow>>> {
        Ok(export_rows(&self.load_transactions()?))
    }

    /// Export to a CSV file, returning the number of rows written
    ///
    /// No file is created when there is nothing to export.
    pub fn export_csv(&self, path: &Path) -> TrackerResult<Outcome<usize>> {
        match self.export_rows()? {
            Outcome::Data(rows) => Ok(Outcome::Data(export_rows_to_file(&rows, path)?)),
            Outcome::Empty(reason) => Ok(Outcome::Empty(reason)),
        }
    }
}
