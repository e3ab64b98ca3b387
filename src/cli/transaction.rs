//! CLI commands for transaction management
//!
//! Implements the add, list and delete commands.

use std::fmt::Write;

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_transaction_list;
use crate::error::{TrackerError, TrackerResult};
use crate::models::NewTransaction;
use crate::services::TransactionService;
use crate::storage::TransactionStore;

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Transaction type: income or expense
        #[arg(value_name = "TYPE")]
        kind: String,

        /// Amount (positive number)
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Category label
        #[arg(short, long)]
        category: String,

        /// Description
        #[arg(short = 'm', long = "description")]
        description: String,

        /// Transaction date (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List transactions, newest first
    List {
        /// Number of transactions to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Delete a transaction by id
    Delete {
        /// Transaction id
        id: i64,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    store: &dyn TransactionStore,
    settings: &Settings,
    cmd: TransactionCommands,
) -> TrackerResult<()> {
    let service = TransactionService::new(store);

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            description,
            date,
        } => {
            let date = match date {
                Some(date) => date,
                None => today(&settings.date_format)?,
            };
            let txn = NewTransaction::parse_with_format(
                &date,
                &settings.date_format,
                &kind,
                &category,
                &amount,
                &description,
            )?;

            let id = service.add(&txn)?;
            println!("Transaction added successfully! (id {})", id);
        }

        TransactionCommands::List { limit } => {
            let rows = service.list(limit)?;
            print!(
                "{}",
                format_transaction_list(&rows, &settings.currency_symbol)
            );
        }

        TransactionCommands::Delete { id } => {
            service.delete(id)?;
            println!("Deleted transaction {}", id);
        }
    }

    Ok(())
}

/// Today's date rendered with the configured format
fn today(date_format: &str) -> TrackerResult<String> {
    let mut out = String::new();
    write!(out, "{}", chrono::Local::now().date_naive().format(date_format)).map_err(|_| {
        TrackerError::Config(format!("Invalid date_format setting: {}", date_format))
    })?;
    Ok(out)
}
