//! Income, expense and balance totals

use crate::models::{Money, MonthKey, Transaction, TransactionType};

/// Income and expense sums with the resulting balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub income: Money,
    pub expense: Money,
    /// income - expense, may be negative
    pub balance: Money,
    pub count: usize,
}

impl Totals {
    pub fn is_negative(&self) -> bool {
        self.balance.is_negative()
    }
}

/// Sum a set of transactions
pub fn totals<'a, I>(transactions: I) -> Totals
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut result = Totals::default();
    for txn in transactions {
        match txn.kind {
            TransactionType::Income => result.income += txn.amount,
            TransactionType::Expense => result.expense += txn.amount,
        }
        result.count += 1;
    }
    result.balance = result.income - result.expense;
    result
}

/// Totals for all time or for one month
#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub month: Option<MonthKey>,
    pub totals: Totals,
}

impl SummaryReport {
    pub fn generate(transactions: &[Transaction], month: Option<MonthKey>) -> Self {
        let totals = match month {
            Some(m) => self::totals(transactions.iter().filter(|t| m.contains(t.date))),
            None => self::totals(transactions),
        };
        Self { month, totals }
    }

    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        let scope = match self.month {
            Some(m) => m.label(),
            None => "All time".to_string(),
        };
        output.push_str(&format!("Summary: {}\n", scope));
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>18}\n",
            "Total Income",
            self.totals.income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<20} {:>18}\n",
            "Total Expenses",
            self.totals.expense.format_with_symbol(symbol)
        ));
        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>18}\n",
            "Current Balance",
            self.totals.balance.format_with_symbol(symbol)
        ));
        output.push_str(&format!("{:<20} {:>18}\n", "Transactions", self.totals.count));

        output
    }
}
