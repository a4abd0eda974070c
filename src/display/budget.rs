//! Budget display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Budget;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format budgets as a table
pub fn format_budget_table(budgets: &[&Budget], symbol: &str) -> String {
    if budgets.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let rows = budgets.iter().map(|b| BudgetRow {
        id: b.id.to_string(),
        month: b.month.to_string(),
        category: b.category.clone(),
        amount: b.amount.format_with_symbol(symbol),
    });
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetInput, Money, MonthKey};

    #[test]
    fn test_budget_table() {
        let month = MonthKey::parse("2024-05").unwrap();
        let input = BudgetInput::new("Food", Money::from_cents(20000), month).unwrap();
        let budget = Budget::new(input);

        let table = format_budget_table(&[&budget], "₹");
        assert!(table.contains("2024-05"));
        assert!(table.contains("Food"));
        assert!(table.contains("₹200.00"));
    }

    #[test]
    fn test_empty_budget_table() {
        assert_eq!(format_budget_table(&[], "₹"), "No budgets set.\n");
    }
}
