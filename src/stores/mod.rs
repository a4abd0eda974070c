//! In-memory record stores owned by the state holder

pub mod budgets;
pub mod transactions;

pub use budgets::{BudgetStore, UpsertOutcome};
pub use transactions::TransactionStore;
