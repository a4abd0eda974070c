//! Category breakdown
//!
//! Sums one transaction type per category, optionally limited to a month,
//! with each category's share of the total.

use super::{category_totals, percentage};
use crate::models::{Money, MonthKey, Transaction, TransactionType};

/// One category's sum and share
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Money,
    pub count: usize,
    /// Percentage of the breakdown total
    pub percentage: f64,
}

/// Per-category sums of one transaction type
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub kind: TransactionType,
    pub month: Option<MonthKey>,
    /// Categories in first-encountered order
    pub categories: Vec<CategoryShare>,
    pub total: Money,
}

/// Break down `kind` transactions by category
///
/// Returns `None` when there is nothing to break down (the total is zero).
pub fn by_category(
    transactions: &[Transaction],
    kind: TransactionType,
    month: Option<MonthKey>,
) -> Option<CategoryBreakdown> {
    let selected = transactions
        .iter()
        .filter(|t| t.kind == kind)
        .filter(|t| month.map_or(true, |m| m.contains(t.date)));

    let sums = category_totals(selected);
    let total: Money = sums.iter().map(|c| c.amount).sum();
    if total.is_zero() {
        return None;
    }

    let categories = sums
        .into_iter()
        .map(|c| CategoryShare {
            percentage: percentage(c.amount, total),
            category: c.category,
            amount: c.amount,
            count: c.count,
        })
        .collect();

    Some(CategoryBreakdown {
        kind,
        month,
        categories,
        total,
    })
}

impl CategoryBreakdown {
    /// Message shown when there is no breakdown for a type
    pub fn empty_message(kind: TransactionType) -> String {
        format!("No {} data to display", kind)
    }

    pub fn get(&self, category: &str) -> Option<&CategoryShare> {
        self.categories.iter().find(|c| c.category == category)
    }

    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        let title = match self.kind {
            TransactionType::Income => "Income by Category",
            TransactionType::Expense => "Expenses by Category",
        };
        match self.month {
            Some(m) => output.push_str(&format!("{}: {}\n", title, m.label())),
            None => output.push_str(&format!("{}\n", title)),
        }
        output.push_str(&"=".repeat(60));
        output.push('\n');

        output.push_str(&format!(
            "{:<28} {:>14} {:>6} {:>8}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for share in &self.categories {
            output.push_str(&format!(
                "{:<28} {:>14} {:>6} {:>7.1}%\n",
                share.category,
                share.amount.format_with_symbol(symbol),
                share.count,
                share.percentage
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>14}\n",
            "TOTAL",
            self.total.format_with_symbol(symbol)
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::fixtures::*;

    fn sample() -> Vec<Transaction> {
        vec![
            expense(30, "Food", "2024-05-01"),
            income(500, "Salary", "2024-05-01"),
            expense(60, "Rent", "2024-05-03"),
            expense(10, "Food", "2024-05-09"),
            expense(100, "Rent", "2024-06-01"),
        ]
    }

    #[test]
    fn test_breakdown_for_month() {
        let breakdown =
            by_category(&sample(), TransactionType::Expense, Some(month("2024-05"))).unwrap();

        assert_eq!(breakdown.total.cents(), 10000);
        let names: Vec<_> = breakdown.categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["Food", "Rent"]);
        assert_eq!(breakdown.get("Food").unwrap().percentage, 40.0);
        assert_eq!(breakdown.get("Rent").unwrap().percentage, 60.0);
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let txns = vec![
            expense(1, "A", "2024-05-01"),
            expense(1, "B", "2024-05-01"),
            expense(1, "C", "2024-05-01"),
        ];
        let breakdown = by_category(&txns, TransactionType::Expense, None).unwrap();
        let sum: f64 = breakdown.categories.iter().map(|c| c.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_state() {
        assert!(by_category(&sample(), TransactionType::Income, Some(month("2024-06"))).is_none());
        assert!(by_category(&[], TransactionType::Expense, None).is_none());
        assert_eq!(
            CategoryBreakdown::empty_message(TransactionType::Income),
            "No income data to display"
        );
    }

    #[test]
    fn test_format_terminal() {
        let breakdown = by_category(&sample(), TransactionType::Expense, None).unwrap();
        let text = breakdown.format_terminal("₹");
        assert!(text.starts_with("Expenses by Category\n"));
        assert!(text.contains("₹160.00"));
        assert!(text.contains("₹200.00"));
    }
}
