//! Core data models for the finance tracker
//!
//! Transactions, budgets and the value types they are built from.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod month;
pub mod transaction;

pub use budget::{Budget, BudgetInput};
pub use category::{default_categories, default_category, BUDGET_CATEGORIES};
pub use ids::{BudgetId, TransactionId};
pub use money::Money;
pub use month::MonthKey;
pub use transaction::{Transaction, TransactionInput, TransactionType, UNCATEGORIZED};
