//! Preset category names
//!
//! Categories are free-form strings. These lists are only the suggestions
//! offered when nothing else is known.

use super::transaction::TransactionType;

/// Suggested expense categories
pub const EXPENSE_CATEGORIES: [&str; 5] = [
    "Bills",
    "Food",
    "Transport (Petrol)",
    "Rent",
    "Miscellaneous",
];

/// Suggested income categories
pub const INCOME_CATEGORIES: [&str; 5] = [
    "Salary",
    "Bonus",
    "Freelance",
    "Investment",
    "Other Income",
];

/// Suggested budget categories
pub const BUDGET_CATEGORIES: [&str; 5] = ["Bills", "Food", "Transport", "Rent", "Other"];

/// Preset categories for a transaction type
pub fn default_categories(kind: TransactionType) -> &'static [&'static str] {
    match kind {
        TransactionType::Expense => &EXPENSE_CATEGORIES,
        TransactionType::Income => &INCOME_CATEGORIES,
    }
}

/// The category a fresh form starts with
pub fn default_category(kind: TransactionType) -> &'static str {
    default_categories(kind)[0]
}
