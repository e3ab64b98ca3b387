//! CSV Export functionality
//!
//! Writes export rows as `date,type,category,amount` with a header line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::rows::ExportRow;
use crate::error::{TrackerError, TrackerResult};

/// Write rows to any writer, returning the number of data rows written
pub fn write_rows_csv<W: Write>(rows: &[ExportRow], writer: W) -> TrackerResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for row in rows {
        csv_writer.serialize(row)?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(rows.len())
}

/// Write rows to a file, replacing it if it exists
pub fn export_rows_to_file(rows: &[ExportRow], path: &Path) -> TrackerResult<usize> {
    let file = File::create(path).map_err(|e| {
        TrackerError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;

    let written = write_rows_csv(rows, BufWriter::new(file))?;
    tracing::info!(rows = written, path = %path.display(), "exported transactions");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn row(date: &str, kind: &str, category: &str, amount: f64) -> ExportRow {
        ExportRow {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            kind: kind.into(),
            category: category.into(),
            amount,
        }
    }

    #[test]
    fn test_write_rows_csv() {
        let rows = vec![
            row("2024-01-05", "income", "salary", 5000.0),
            row("2024-01-10", "expense", "eating, out", 12.5),
        ];

        let mut output = Vec::new();
        let written = write_rows_csv(&rows, &mut output).unwrap();
        assert_eq!(written, 2);

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "date,type,category,amount");
        assert_eq!(lines[1], "2024-01-05,income,salary,5000.0");
        assert_eq!(lines[2], "2024-01-10,expense,\"eating, out\",12.5");
    }

    #[test]
    fn test_export_rows_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expense_data.csv");

        let written =
            export_rows_to_file(&[row("2024-02-01", "expense", "rent", 1000.0)], &path).unwrap();
        assert_eq!(written, 1);

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("date,type,category,amount\n"));
        assert!(text.contains("2024-02-01,expense,rent,1000.0"));
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("out.csv");

        let err = export_rows_to_file(&[row("2024-02-01", "expense", "rent", 1.0)], &path)
            .unwrap_err();
        assert!(matches!(err, TrackerError::Export(_)));
    }
}
