//! Report CLI commands
//!
//! Implements CLI commands for generating reports.

use clap::Subcommand;

use crate::config::Settings;
use crate::error::TrackerResult;
use crate::models::{MonthKey, TransactionType};
use crate::reports::{
    budget_overview, by_category, by_month, dashboard, CategoryBreakdown, InsightReport,
    SummaryReport,
};
use crate::storage::KeyValueStore;
use crate::tracker::Tracker;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Income, expenses and balance
    Summary {
        /// Restrict to one month (YYYY-MM); all time otherwise
        #[arg(short, long)]
        month: Option<MonthKey>,
    },
    /// Totals and shares per category
    Categories {
        /// Transaction type to break down
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: TransactionType,
        /// Restrict to one month (YYYY-MM); all time otherwise
        #[arg(short, long)]
        month: Option<MonthKey>,
    },
    /// Category sums per month
    Monthly {
        /// Transaction type to group
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: TransactionType,
    },
    /// Budgeted versus spent per category
    Overview {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<MonthKey>,
    },
    /// Spending insights for a month
    Insights {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<MonthKey>,
    },
}

/// Handle a report command
pub fn handle_report_command<S: KeyValueStore>(
    tracker: &Tracker<S>,
    settings: &Settings,
    cmd: ReportCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let transactions = tracker.transactions();
    let budgets = tracker.budgets();

    match cmd {
        ReportCommands::Summary { month } => {
            let report = SummaryReport::generate(transactions, month);
            print!("{}", report.format_terminal(symbol));
        }

        ReportCommands::Categories { kind, month } => {
            match by_category(transactions, kind, month) {
                Some(breakdown) => print!("{}", breakdown.format_terminal(symbol)),
                None => println!("{}", CategoryBreakdown::empty_message(kind)),
            }
        }

        ReportCommands::Monthly { kind } => {
            print!("{}", by_month(transactions, kind).format_terminal(symbol));
        }

        ReportCommands::Overview { month } => {
            let month = month.unwrap_or_else(MonthKey::current);
            let overview = budget_overview(transactions, budgets, month);
            print!("{}", overview.format_terminal(symbol));
        }

        ReportCommands::Insights { month } => {
            let month = month.unwrap_or_else(MonthKey::current);
            let report = InsightReport::generate(transactions, budgets, month);
            print!("{}", report.format_terminal(symbol));
        }
    }

    Ok(())
}

/// Print the dashboard for `month`
pub fn handle_dashboard<S: KeyValueStore>(
    tracker: &Tracker<S>,
    settings: &Settings,
    month: Option<MonthKey>,
) -> TrackerResult<()> {
    let month = month.unwrap_or_else(MonthKey::current);
    let dash = dashboard(
        tracker.transactions(),
        tracker.budgets(),
        month,
        settings.recent_count,
    );
    print!("{}", dash.format_terminal(&settings.currency_symbol));
    Ok(())
}
