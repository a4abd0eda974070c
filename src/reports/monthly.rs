//! Month-by-month category sums for one transaction type
//!
//! This is the data behind a stacked bar chart: one bucket per month that
//! has transactions, and one series per category aligned with the months.

use std::collections::BTreeMap;

use super::category_totals;
use crate::models::{Money, MonthKey, Transaction, TransactionType};

/// Category sums within one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthBucket {
    pub month: MonthKey,
    /// Category sums in first-encountered order
    pub categories: Vec<(String, Money)>,
    pub total: Money,
}

impl MonthBucket {
    pub fn amount(&self, category: &str) -> Money {
        self.categories
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, amount)| *amount)
            .unwrap_or_default()
    }
}

/// Monthly category sums, months ascending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySeries {
    pub kind: TransactionType,
    pub months: Vec<MonthBucket>,
    /// Every category seen, in first-encountered order
    pub categories: Vec<String>,
}

/// Group `kind` transactions by month, then by category
pub fn by_month(transactions: &[Transaction], kind: TransactionType) -> MonthlySeries {
    let selected: Vec<&Transaction> = transactions.iter().filter(|t| t.kind == kind).collect();

    let categories = category_totals(selected.iter().copied())
        .into_iter()
        .map(|c| c.category)
        .collect();

    let mut grouped: BTreeMap<MonthKey, Vec<&Transaction>> = BTreeMap::new();
    for &txn in &selected {
        grouped.entry(txn.month()).or_default().push(txn);
    }

    let months = grouped
        .into_iter()
        .map(|(month, txns)| {
            let sums = category_totals(txns);
            MonthBucket {
                month,
                total: sums.iter().map(|c| c.amount).sum(),
                categories: sums.into_iter().map(|c| (c.category, c.amount)).collect(),
            }
        })
        .collect();

    MonthlySeries {
        kind,
        months,
        categories,
    }
}

impl MonthlySeries {
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn month_keys(&self) -> Vec<MonthKey> {
        self.months.iter().map(|b| b.month).collect()
    }

    /// One value per month for `category`, zero where it had nothing
    pub fn series(&self, category: &str) -> Vec<Money> {
        self.months.iter().map(|b| b.amount(category)).collect()
    }

    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        let title = match self.kind {
            TransactionType::Income => "Monthly Income",
            TransactionType::Expense => "Monthly Expenses",
        };
        output.push_str(&format!("{}\n", title));

        if self.is_empty() {
            output.push_str(&format!("No {} data to display\n", self.kind));
            return output;
        }

        let width = 24 + self.months.len() * 14;
        output.push_str(&"=".repeat(width));
        output.push('\n');

        output.push_str(&format!("{:<24}", "Category"));
        for bucket in &self.months {
            output.push_str(&format!("{:>14}", bucket.month.to_string()));
        }
        output.push('\n');
        output.push_str(&"-".repeat(width));
        output.push('\n');

        for category in &self.categories {
            output.push_str(&format!("{:<24}", category));
            for amount in self.series(category) {
                output.push_str(&format!("{:>14}", amount.format_with_symbol(symbol)));
            }
            output.push('\n');
        }

        output.push_str(&"-".repeat(width));
        output.push('\n');
        output.push_str(&format!("{:<24}", "TOTAL"));
        for bucket in &self.months {
            output.push_str(&format!("{:>14}", bucket.total.format_with_symbol(symbol)));
        }
        output.push('\n');

        output
    }
}
