//! Transaction display formatting
//!
//! Renders the paginated transaction list as a table and a single
//! transaction as a detail block.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Transaction;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl TransactionRow {
    fn new(txn: &Transaction, symbol: &str) -> Self {
        Self {
            id: txn.id.to_string(),
            date: txn.date.format("%Y-%m-%d").to_string(),
            category: truncate(txn.category_or_default(), 24),
            kind: txn.kind.to_string(),
            amount: txn.amount.format_with_symbol(symbol),
        }
    }
}

/// Format a page of transactions as a table
pub fn format_transaction_table(transactions: &[&Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions available.\n".to_string();
    }

    let rows = transactions.iter().map(|t| TransactionRow::new(t, symbol));
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

/// "Page 2 of 5"
pub fn format_page_indicator(page: usize, total_pages: usize) -> String {
    format!("Page {} of {}", page, total_pages.max(1))
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Full ID:     {}\n", txn.id.as_uuid()));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Amount:      {}\n", txn.amount.format_with_symbol(symbol)));
    output.push_str(&format!("Category:    {}\n", txn.category_or_default()));

    output
}

/// Truncate a string to a maximum length
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
