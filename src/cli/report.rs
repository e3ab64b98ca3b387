//! CLI commands for reports
//!
//! Each report prints either its terminal rendering or, with `--json`, the
//! serialized value. A report with nothing to show prints the reason instead.

use clap::Subcommand;
use serde::Serialize;

use crate::config::Settings;
use crate::error::TrackerResult;
use crate::models::YearMonth;
use crate::reports::Outcome;
use crate::services::ReportService;
use crate::storage::TransactionStore;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Income, expense and savings for one month
    Summary {
        /// Month to summarize (e.g., "2025-01"); defaults to the current month
        #[arg(short, long)]
        period: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Expense totals by category
    #[command(alias = "category")]
    Categories {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Daily expense trend
    #[command(alias = "daily")]
    Trend {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Expense totals by month
    Monthly {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Handle report commands
pub fn handle_report_command(
    store: &dyn TransactionStore,
    settings: &Settings,
    cmd: ReportCommands,
) -> TrackerResult<()> {
    let service = ReportService::new(store);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Summary { period, json } => {
            let period = match period {
                Some(p) => YearMonth::parse(&p)?,
                None => YearMonth::current(),
            };
            let outcome = service.monthly_summary(period)?;
            print_outcome(&outcome, json, |s| s.format_terminal(currency))
        }
        ReportCommands::Categories { json } => {
            let outcome = service.category_totals()?;
            print_outcome(&outcome, json, |c| c.format_terminal(currency))
        }
        ReportCommands::Trend { json } => {
            let outcome = service.daily_trend()?;
            print_outcome(&outcome, json, |t| t.format_terminal(currency))
        }
        ReportCommands::Monthly { json } => {
            let outcome = service.monthly_expenses()?;
            print_outcome(&outcome, json, |m| m.format_terminal(currency))
        }
    }
}

fn print_outcome<T: Serialize>(
    outcome: &Outcome<T>,
    json: bool,
    render: impl FnOnce(&T) -> String,
) -> TrackerResult<()> {
    match outcome {
        Outcome::Data(report) if json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        Outcome::Data(report) => print!("{}", render(report)),
        Outcome::Empty(reason) => println!("{}", reason),
    }
    Ok(())
}
