//! Dashboard summary
//!
//! All-time totals, the month's budget status, the all-time expense
//! breakdown and the most recently created transactions.

use super::categories::{by_category, CategoryBreakdown};
use super::summary::{totals, Totals};
use crate::models::{Budget, Money, MonthKey, Transaction, TransactionType};

/// Spent against budgeted for one month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetStatus {
    pub month: MonthKey,
    pub spent: Money,
    pub budgeted: Money,
}

impl BudgetStatus {
    pub fn is_over(&self) -> bool {
        self.spent > self.budgeted
    }
}

/// Everything the dashboard shows
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub totals: Totals,
    pub budget_status: BudgetStatus,
    /// `None` when nothing has been spent yet
    pub expense_breakdown: Option<CategoryBreakdown>,
    /// Newest created first
    pub recent: Vec<Transaction>,
}

/// Build the dashboard; `transactions` must be in creation order
pub fn dashboard(
    transactions: &[Transaction],
    budgets: &[Budget],
    month: MonthKey,
    recent: usize,
) -> Dashboard {
    let spent: Money = transactions
        .iter()
        .filter(|t| t.is_expense() && month.contains(t.date))
        .map(|t| t.amount)
        .sum();
    let budgeted: Money = budgets
        .iter()
        .filter(|b| b.month == month)
        .map(|b| b.amount)
        .sum();

    Dashboard {
        totals: totals(transactions),
        budget_status: BudgetStatus {
            month,
            spent,
            budgeted,
        },
        expense_breakdown: by_category(transactions, TransactionType::Expense, None),
        recent: transactions.iter().rev().take(recent).cloned().collect(),
    }
}

impl Dashboard {
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();
        let m = |amount: Money| amount.format_with_symbol(symbol);

        output.push_str("Dashboard\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!("{:<24} {:>20}\n", "Total Income", m(self.totals.income)));
        output.push_str(&format!("{:<24} {:>20}\n", "Total Expenses", m(self.totals.expense)));
        output.push_str(&format!("{:<24} {:>20}\n", "Current Balance", m(self.totals.balance)));

        let status = &self.budget_status;
        output.push_str(&format!(
            "{:<24} {:>20}{}\n",
            format!("Budget Status ({})", status.month),
            format!("{} / {}", m(status.spent), m(status.budgeted)),
            if status.is_over() { " (over budget)" } else { "" }
        ));

        output.push_str("\nExpense Breakdown\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        match &self.expense_breakdown {
            Some(breakdown) => {
                for share in &breakdown.categories {
                    output.push_str(&format!(
                        "{:<28} {:>14} {:>7.1}%\n",
                        share.category,
                        m(share.amount),
                        share.percentage
                    ));
                }
            }
            None => {
                output.push_str(&CategoryBreakdown::empty_message(TransactionType::Expense));
                output.push('\n');
            }
        }

        output.push_str("\nRecent Transactions\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        if self.recent.is_empty() {
            output.push_str("No transactions available.\n");
        }
        for txn in &self.recent {
            output.push_str(&format!(
                "{:<12} {:<24} {:>14} {}\n",
                txn.date.format("%Y-%m-%d"),
                txn.category_or_default(),
                m(txn.amount),
                txn.kind
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::fixtures::*;

    #[test]
    fn test_dashboard() {
        let txns = vec![
            income(2000, "Salary", "2024-05-01"),
            expense(300, "Rent", "2024-04-03"),
            expense(150, "Food", "2024-05-04"),
            expense(100, "Food", "2024-05-05"),
        ];
        let budgets = vec![budget("Food", 200, "2024-05"), budget("Rent", 900, "2024-04")];

        let dash = dashboard(&txns, &budgets, month("2024-05"), 2);

        assert_eq!(dash.totals.balance.cents(), 145000);
        assert_eq!(dash.budget_status.spent.cents(), 25000);
        assert_eq!(dash.budget_status.budgeted.cents(), 20000);
        assert!(dash.budget_status.is_over());

        let breakdown = dash.expense_breakdown.as_ref().unwrap();
        assert_eq!(breakdown.total.cents(), 55000);

        let recent: Vec<i64> = dash.recent.iter().map(|t| t.amount.cents()).collect();
        assert_eq!(recent, vec![10000, 15000]);
    }

    #[test]
    fn test_empty_dashboard() {
        let dash = dashboard(&[], &[], month("2024-05"), 5);
        assert!(dash.expense_breakdown.is_none());
        assert!(!dash.budget_status.is_over());

        let text = dash.format_terminal("₹");
        assert!(text.contains("No expense data to display"));
        assert!(text.contains("No transactions available."));
        assert!(text.contains("₹0.00 / ₹0.00"));
    }
}
