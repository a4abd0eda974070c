//! Budget CLI commands
//!
//! Implements CLI commands for monthly category budgets.

use clap::Subcommand;

use super::print_notification;
use crate::config::Settings;
use crate::display::format_budget_table;
use crate::error::TrackerResult;
use crate::forms::BudgetForm;
use crate::models::{Budget, MonthKey};
use crate::storage::KeyValueStore;
use crate::tracker::Tracker;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the budget for a category and month, replacing any existing one
    Set {
        /// Category name
        category: String,
        /// Budgeted amount
        amount: String,
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },
    /// List budgets
    List {
        /// Only show this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<MonthKey>,
    },
    /// Delete a budget
    Delete {
        /// Budget ID
        id: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command<S: KeyValueStore>(
    tracker: &mut Tracker<S>,
    settings: &Settings,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    match cmd {
        BudgetCommands::Set {
            category,
            amount,
            month,
        } => {
            let mut form = BudgetForm::blank(MonthKey::current());
            form.category = category;
            form.amount = amount;
            if let Some(month) = month {
                form.month = month;
            }

            let outcome = tracker.set_budget(&form)?;
            print_notification(tracker);
            if let Some(budget) = tracker.budget_store().get(outcome.id()) {
                println!("  {} ({})", budget, budget.id);
            }
        }

        BudgetCommands::List { month } => {
            let budgets: Vec<&Budget> = match month {
                Some(month) => tracker.budget_store().for_month(month),
                None => tracker.budgets().iter().collect(),
            };
            print!("{}", format_budget_table(&budgets, &settings.currency_symbol));
        }

        BudgetCommands::Delete { id } => {
            let id = tracker.budget_store().find(&id)?.id;
            tracker.delete_budget(id)?;
            print_notification(tracker);
        }
    }

    Ok(())
}
