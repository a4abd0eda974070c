//! Budget store
//!
//! At most one budget exists per (category, month). Setting a budget for an
//! occupied slot replaces the amount in place.

use tracing::{info, warn};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Budget, BudgetId, BudgetInput, MonthKey};

/// What a budget upsert did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted(BudgetId),
    Replaced(BudgetId),
}

impl UpsertOutcome {
    pub fn id(&self) -> BudgetId {
        match self {
            Self::Inserted(id) | Self::Replaced(id) => *id,
        }
    }

    pub fn is_replaced(&self) -> bool {
        matches!(self, Self::Replaced(_))
    }
}

/// In-memory collection of budgets in the order they were first set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetStore {
    budgets: Vec<Budget>,
}

impl BudgetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap records loaded from storage, dropping later duplicates of a slot
    pub fn from_records(records: Vec<Budget>) -> Self {
        let mut store = Self::new();
        for budget in records {
            if store.slot(&budget.category, budget.month).is_none() {
                store.budgets.push(budget);
            } else {
                warn!(
                    category = %budget.category,
                    month = %budget.month,
                    "Skipping duplicate stored budget"
                );
            }
        }
        store
    }

    pub fn len(&self) -> usize {
        self.budgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.budgets.is_empty()
    }

    pub fn all(&self) -> &[Budget] {
        &self.budgets
    }

    /// Set the budget for the input's (category, month), replacing any existing one
    pub fn upsert(&mut self, input: BudgetInput) -> UpsertOutcome {
        match self.slot(input.category(), input.month()) {
            Some(index) => {
                let existing = &mut self.budgets[index];
                existing.amount = input.amount();
                info!(
                    id = %existing.id,
                    category = %existing.category,
                    month = %existing.month,
                    "Budget replaced"
                );
                UpsertOutcome::Replaced(existing.id)
            }
            None => {
                let budget = Budget::new(input);
                let id = budget.id;
                info!(id = %id, category = %budget.category, month = %budget.month, "Budget set");
                self.budgets.push(budget);
                UpsertOutcome::Inserted(id)
            }
        }
    }

    pub fn delete(&mut self, id: BudgetId) -> TrackerResult<Budget> {
        let index = self
            .budgets
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| TrackerError::budget_not_found(id.to_string()))?;

        let removed = self.budgets.remove(index);
        info!(id = %id, "Budget deleted");
        Ok(removed)
    }

    pub fn get(&self, id: BudgetId) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.id == id)
    }

    /// Look up a budget by full id, short id or unambiguous id prefix
    pub fn find(&self, identifier: &str) -> TrackerResult<&Budget> {
        let mut matches = self.budgets.iter().filter(|b| b.id.matches(identifier));

        match (matches.next(), matches.next()) {
            (Some(budget), None) => Ok(budget),
            (None, _) => Err(TrackerError::budget_not_found(identifier)),
            (Some(_), Some(_)) => Err(TrackerError::Validation(format!(
                "Budget id '{}' is ambiguous, use more characters",
                identifier
            ))),
        }
    }

    /// Budgets of one month, in store order
    pub fn for_month(&self, month: MonthKey) -> Vec<&Budget> {
        self.budgets.iter().filter(|b| b.month == month).collect()
    }

    fn slot(&self, category: &str, month: MonthKey) -> Option<usize> {
        self.budgets.iter().position(|b| b.is_for(category, month))
    }
}
