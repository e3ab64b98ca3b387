//! Export module for the expense tracker
//!
//! The export projection and its CSV rendering.

pub mod csv;
pub mod rows;

pub use self::csv::{export_rows_to_file, write_rows_csv};
pub use rows::{export_rows, ExportRow};
