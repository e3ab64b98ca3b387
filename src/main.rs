use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_export_command, handle_report_command, handle_transaction_command, ReportCommands,
    TransactionCommands,
};
use expense_tracker::config::{Settings, TrackerPaths};
use expense_tracker::logging;
use expense_tracker::storage::SqliteStore;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Personal expense tracker",
    long_about = "Records income and expense transactions in a local SQLite \
                  database and reports monthly summaries, category totals and \
                  spending trends from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory, database and settings file
    Init,

    #[command(flatten)]
    Transaction(TransactionCommands),

    /// Reports over all stored transactions
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export all transactions to CSV
    Export {
        /// Output file path (defaults to the configured export file)
        output: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config,
}

fn open_store(paths: &TrackerPaths, settings: &Settings) -> Result<SqliteStore> {
    paths.ensure_directories()?;
    let store = SqliteStore::open(
        paths.database_file(&settings.database.file_name),
        &settings.database,
    )?;
    Ok(store)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    logging::init(&settings.log_level);

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing expense tracker at: {}", paths.base_dir().display());
            let store = open_store(&paths, &settings)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!("Stored transactions: {}", store.count()?);
            println!();
            println!("Run 'expense add expense 200 -c food -m lunch' to record a transaction.");
        }
        Some(Commands::Transaction(cmd)) => {
            let store = open_store(&paths, &settings)?;
            handle_transaction_command(&store, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            let store = open_store(&paths, &settings)?;
            handle_report_command(&store, &settings, cmd)?;
        }
        Some(Commands::Export { output }) => {
            let store = open_store(&paths, &settings)?;
            handle_export_command(&store, &paths, &settings, output)?;
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!(
                "Database file:    {}",
                paths.database_file(&settings.database.file_name).display()
            );
            println!("Export directory: {}", paths.export_dir().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Export file:     {}", settings.export_file_name);
            println!("  Log level:       {}", settings.log_level);
        }
        None => {
            println!("Expense Tracker - income, expenses and savings from the terminal");
            println!();
            println!("Run 'expense --help' for usage information.");
        }
    }

    Ok(())
}
