//! Service layer for the expense tracker
//!
//! The service layer sits between storage and the command line: it fetches
//! raw records, normalizes them and hands them to the reports.

pub mod normalize;
pub mod report;
pub mod transaction;

pub use normalize::{normalize, normalize_record, normalize_with_report, NormalizeReport};
pub use report::ReportService;
pub use transaction::TransactionService;
