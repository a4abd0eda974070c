//! Transaction CLI commands
//!
//! Implements CLI commands for transaction management.

use clap::Subcommand;

use super::{print_notification, today};
use crate::config::Settings;
use crate::display::{format_page_indicator, format_transaction_details, format_transaction_table};
use crate::error::TrackerResult;
use crate::forms::TransactionForm;
use crate::models::TransactionType;
use crate::storage::KeyValueStore;
use crate::tracker::Tracker;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Amount (e.g., "250.00")
        amount: String,
        /// Transaction type (income or expense)
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: TransactionType,
        /// Category name, defaults to the first preset for the type
        #[arg(short, long)]
        category: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Page number
        #[arg(short, long, default_value = "1")]
        page: usize,
    },
    /// Show transaction details
    Show {
        /// Transaction ID
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New type; resets the category unless one is given too
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command<S: KeyValueStore>(
    tracker: &mut Tracker<S>,
    settings: &Settings,
    cmd: TransactionCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            amount,
            kind,
            category,
            date,
        } => {
            let today = today();
            let mut form = TransactionForm::blank(today);
            form.set_kind(kind);
            form.amount = amount;
            if let Some(category) = category {
                form.category = category;
            }
            if let Some(date) = date {
                form.date = date;
            }

            let outcome = tracker.submit_transaction(&form, today)?;
            print_notification(tracker);
            println!("  ID: {}", outcome.id());
        }

        TransactionCommands::List { page } => {
            tracker.go_to_page(page);
            let rows = tracker.current_page();
            print!("{}", format_transaction_table(&rows, symbol));
            if !rows.is_empty() {
                println!(
                    "{} ({} transactions)",
                    format_page_indicator(tracker.pager().page(), tracker.total_pages()),
                    tracker.transactions().len()
                );
            }
        }

        TransactionCommands::Show { id } => {
            let txn = tracker.transaction_store().find(&id)?;
            print!("{}", format_transaction_details(txn, symbol));
        }

        TransactionCommands::Edit {
            id,
            amount,
            kind,
            category,
            date,
        } => {
            let id = tracker.transaction_store().find(&id)?.id;
            let mut form = tracker.begin_edit(id)?;

            if let Some(kind) = kind {
                form.set_kind(kind);
            }
            if let Some(amount) = amount {
                form.amount = amount;
            }
            if let Some(category) = category {
                form.category = category;
            }
            if let Some(date) = date {
                form.date = date;
            }

            let result = tracker.submit_transaction(&form, today());
            if result.is_err() {
                tracker.cancel_edit();
            }
            result?;
            print_notification(tracker);
        }

        TransactionCommands::Delete { id } => {
            let id = tracker.transaction_store().find(&id)?.id;
            let removed = tracker.delete_transaction(id)?;
            print_notification(tracker);
            println!("  {}", removed);
        }
    }

    Ok(())
}
