//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the [`Tracker`] state holder.

pub mod budget;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use report::{handle_dashboard, handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::{Local, NaiveDate};

use crate::display::format_notification;
use crate::notification::NotificationKind;
use crate::storage::KeyValueStore;
use crate::tracker::Tracker;

/// Today's date in local time
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Print the notification left behind by the last mutation
///
/// Warnings go to stderr so they are visible even when stdout is piped.
pub(crate) fn print_notification<S: KeyValueStore>(tracker: &Tracker<S>) {
    if let Some(notification) = tracker.latest_notification() {
        match notification.kind {
            NotificationKind::Warning | NotificationKind::Error => {
                eprintln!("{}", format_notification(notification))
            }
            NotificationKind::Info | NotificationKind::Success => {
                println!("{}", format_notification(notification))
            }
        }
    }
}
