//! CLI command for CSV export

use std::path::PathBuf;

use crate::config::{Settings, TrackerPaths};
use crate::error::TrackerResult;
use crate::reports::Outcome;
use crate::services::ReportService;
use crate::storage::TransactionStore;

/// Resolve the export destination
///
/// Without an explicit path the configured file name is placed in the
/// export directory, which is created if needed.
pub fn export_path(
    paths: &TrackerPaths,
    settings: &Settings,
    output: Option<PathBuf>,
) -> TrackerResult<PathBuf> {
    match output {
        Some(path) => Ok(path),
        None => {
            let dir = paths.export_dir();
            std::fs::create_dir_all(&dir)?;
            Ok(dir.join(&settings.export_file_name))
        }
    }
}

/// Handle the export command
pub fn handle_export_command(
    store: &dyn TransactionStore,
    paths: &TrackerPaths,
    settings: &Settings,
    output: Option<PathBuf>,
) -> TrackerResult<()> {
    let path = export_path(paths, settings, output)?;

    match ReportService::new(store).export_csv(&path)? {
        Outcome::Data(rows) => {
            println!("Exported {} transactions to: {}", rows, path.display());
        }
        Outcome::Empty(_) => println!("No data to export."),
    }

    Ok(())
}
