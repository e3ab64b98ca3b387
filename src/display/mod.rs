//! Display formatting for terminal output
//!
//! Plain-text tables and bars for listings and reports.

pub mod report;
pub mod transaction;

pub use transaction::{format_transaction_list, format_transaction_row};
