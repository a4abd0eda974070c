//! Budget Overview Report
//!
//! Compares each budget of a month with what was spent in its category.
//! Categories with spending but no budget get a row too, with nothing
//! budgeted.

use super::category_totals;
use crate::models::{Budget, Money, MonthKey, Transaction, TransactionType};

/// Budgeted versus spent for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewRow {
    pub category: String,
    /// Zero when the category has no budget this month
    pub budgeted: Money,
    pub spent: Money,
    /// budgeted - spent
    pub remaining: Money,
}

impl OverviewRow {
    fn new(category: String, budgeted: Money, spent: Money) -> Self {
        Self {
            category,
            budgeted,
            spent,
            remaining: budgeted - spent,
        }
    }

    pub fn has_budget(&self) -> bool {
        self.budgeted.is_positive()
    }

    pub fn is_overspent(&self) -> bool {
        self.remaining.is_negative()
    }
}

/// Budget Overview for one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetOverview {
    pub month: MonthKey,
    /// Budgeted categories in budget order, then unbudgeted ones in spend order
    pub rows: Vec<OverviewRow>,
    pub total_budgeted: Money,
    pub total_spent: Money,
    pub total_remaining: Money,
}

/// Build the overview of `month`
pub fn budget_overview(
    transactions: &[Transaction],
    budgets: &[Budget],
    month: MonthKey,
) -> BudgetOverview {
    let spending = category_totals(
        transactions
            .iter()
            .filter(|t| t.kind == TransactionType::Expense && month.contains(t.date)),
    );
    let spent_on = |category: &str| {
        spending
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.amount)
            .unwrap_or_default()
    };

    let month_budgets: Vec<&Budget> = budgets.iter().filter(|b| b.month == month).collect();

    let mut rows: Vec<OverviewRow> = month_budgets
        .iter()
        .map(|b| OverviewRow::new(b.category.clone(), b.amount, spent_on(&b.category)))
        .collect();

    for entry in &spending {
        if !month_budgets.iter().any(|b| b.category == entry.category) {
            rows.push(OverviewRow::new(entry.category.clone(), Money::zero(), entry.amount));
        }
    }

    let total_budgeted: Money = rows.iter().map(|r| r.budgeted).sum();
    let total_spent: Money = rows.iter().map(|r| r.spent).sum();

    BudgetOverview {
        month,
        rows,
        total_budgeted,
        total_spent,
        total_remaining: total_budgeted - total_spent,
    }
}

impl BudgetOverview {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Message shown instead of the table when there are no rows
    pub fn empty_message(&self) -> String {
        format!("No budget or expenses for {}.", self.month.label())
    }

    pub fn row(&self, category: &str) -> Option<&OverviewRow> {
        self.rows.iter().find(|r| r.category == category)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Budget Overview - {}\n", self.month.label()));
        output.push_str(&"=".repeat(72));
        output.push('\n');

        if self.is_empty() {
            output.push_str(&self.empty_message());
            output.push('\n');
            return output;
        }

        output.push_str(&format!(
            "{:<28} {:>14} {:>14} {:>14}\n",
            "Category", "Budgeted", "Spent", "Remaining"
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');

        for row in &self.rows {
            let remaining = if row.is_overspent() {
                format!("{} *", row.remaining.format_with_symbol(symbol))
            } else {
                row.remaining.format_with_symbol(symbol)
            };

            output.push_str(&format!(
                "{:<28} {:>14} {:>14} {:>14}\n",
                row.category,
                row.budgeted.format_with_symbol(symbol),
                row.spent.format_with_symbol(symbol),
                remaining
            ));
        }

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>14} {:>14} {:>14}\n",
            "TOTAL",
            self.total_budgeted.format_with_symbol(symbol),
            self.total_spent.format_with_symbol(symbol),
            self.total_remaining.format_with_symbol(symbol)
        ));

        if self.rows.iter().any(|r| r.is_overspent()) {
            output.push_str("\n* Overspent\n");
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::fixtures::*;

    #[test]
    fn test_rows_and_ordering() {
        let budgets = vec![
            budget("Rent", 1000, "2024-05"),
            budget("Food", 200, "2024-05"),
            budget("Food", 999, "2024-06"),
        ];
        let txns = vec![
            expense(50, "Fuel", "2024-05-02"),
            expense(120, "Food", "2024-05-03"),
            expense(30, "Books", "2024-05-04"),
            expense(500, "Food", "2024-04-30"),
            income(3000, "Salary", "2024-05-01"),
        ];

        let overview = budget_overview(&txns, &budgets, month("2024-05"));
        let names: Vec<_> = overview.rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(names, vec!["Rent", "Food", "Fuel", "Books"]);

        let rent = overview.row("Rent").unwrap();
        assert_eq!(rent.spent, Money::zero());
        assert_eq!(rent.remaining.cents(), 100000);

        let food = overview.row("Food").unwrap();
        assert_eq!(food.spent.cents(), 12000);
        assert_eq!(food.remaining.cents(), 8000);

        let fuel = overview.row("Fuel").unwrap();
        assert!(!fuel.has_budget());
        assert_eq!(fuel.remaining.cents(), -5000);
        assert!(fuel.is_overspent());

        for row in &overview.rows {
            assert_eq!(row.remaining, row.budgeted - row.spent);
        }
        assert_eq!(overview.total_budgeted.cents(), 120000);
        assert_eq!(overview.total_spent.cents(), 20000);
        assert_eq!(overview.total_remaining.cents(), 100000);
    }

    #[test]
    fn test_empty_month() {
        let overview = budget_overview(&[], &[budget("Food", 10, "2024-06")], month("2024-05"));
        assert!(overview.is_empty());
        assert_eq!(overview.empty_message(), "No budget or expenses for May 2024.");
        assert!(overview.format_terminal("₹").contains("No budget or expenses for May 2024."));
    }

    #[test]
    fn test_format_marks_overspent() {
        let txns = vec![expense(150, "Food", "2024-05-03")];
        let budgets = vec![budget("Food", 100, "2024-05")];

        let text = budget_overview(&txns, &budgets, month("2024-05")).format_terminal("₹");
        assert!(text.contains("-₹50.00 *"));
        assert!(text.contains("* Overspent"));
    }
}
