//! Reports derived from the record collections
//!
//! Every report is a pure function of `&[Transaction]` / `&[Budget]`
//! snapshots and is recomputed on demand. Each report type has a
//! `format_terminal` method taking the currency symbol to print with.

pub mod budget_overview;
pub mod categories;
pub mod dashboard;
pub mod insights;
pub mod monthly;
pub mod summary;

pub use budget_overview::{budget_overview, BudgetOverview, OverviewRow};
pub use categories::{by_category, CategoryBreakdown, CategoryShare};
pub use dashboard::{dashboard, BudgetStatus, Dashboard};
pub use insights::{generate_insights, Insight, InsightKind, InsightReport};
pub use monthly::{by_month, MonthBucket, MonthlySeries};
pub use summary::{totals, SummaryReport, Totals};

use std::collections::HashMap;

use crate::models::{Money, Transaction};

/// Sum and count for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CategoryTotal {
    pub category: String,
    pub amount: Money,
    pub count: usize,
}

/// Sum amounts per category, in the order categories are first encountered
pub(crate) fn category_totals<'a, I>(transactions: I) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for txn in transactions {
        let category = txn.category_or_default();
        match index.get(category) {
            Some(&i) => {
                totals[i].amount += txn.amount;
                totals[i].count += 1;
            }
            None => {
                index.insert(category.to_string(), totals.len());
                totals.push(CategoryTotal {
                    category: category.to_string(),
                    amount: txn.amount,
                    count: 1,
                });
            }
        }
    }

    totals
}

/// Share of `part` in `total` as a percentage, 0 when the total is 0
pub(crate) fn percentage(part: Money, total: Money) -> f64 {
    if total.is_zero() {
        0.0
    } else {
        part.cents() as f64 * 100.0 / total.cents() as f64
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_category_totals_first_seen_order() {
        let mut blank = expense(5, "Food", "2024-05-03");
        blank.category = "  ".into();
        let txns = vec![
            expense(10, "Rent", "2024-05-01"),
            expense(20, "Food", "2024-05-02"),
            expense(5, "Rent", "2024-05-04"),
            blank,
        ];

        let totals = category_totals(&txns);
        let names: Vec<_> = totals.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(names, vec!["Rent", "Food", "Uncategorized"]);
        assert_eq!(totals[0].amount.cents(), 1500);
        assert_eq!(totals[0].count, 2);
    }

    #[test]
    fn test_percentage_of_zero_total() {
        assert_eq!(percentage(Money::from_cents(5), Money::zero()), 0.0);
        assert_eq!(percentage(Money::from_cents(25), Money::from_cents(100)), 25.0);
    }
}
