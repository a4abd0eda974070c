//! Budget model
//!
//! A spending ceiling for one category in one month.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;
use super::month::MonthKey;
use crate::forms::{Field, FieldErrors, AMOUNT_TOO_LARGE};

/// Validated field values for setting a budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetInput {
    category: String,
    amount: Money,
    month: MonthKey,
}

impl BudgetInput {
    /// Validate raw values against the record invariants
    pub fn new(
        category: impl Into<String>,
        amount: Money,
        month: MonthKey,
    ) -> Result<Self, FieldErrors> {
        let category: String = category.into();
        let category = category.trim().to_string();
        let mut errors = FieldErrors::new();

        if !amount.is_positive() {
            errors.insert(Field::Amount, "Amount must be a positive number");
        } else if !amount.is_within_limit() {
            errors.insert(Field::Amount, AMOUNT_TOO_LARGE);
        }
        if category.is_empty() {
            errors.insert(Field::Category, "Category is required");
        }

        errors.into_result(Self {
            category,
            amount,
            month,
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn month(&self) -> MonthKey {
        self.month
    }
}

/// A monthly budget for a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// Category this budget limits
    pub category: String,

    /// Monthly ceiling, always positive
    pub amount: Money,

    /// Month the budget applies to
    pub month: MonthKey,
}

impl Budget {
    /// Create a new budget with a fresh id
    pub fn new(input: BudgetInput) -> Self {
        Self {
            id: BudgetId::new(),
            category: input.category,
            amount: input.amount,
            month: input.month,
        }
    }

    /// Whether this budget occupies the given (category, month) slot
    pub fn is_for(&self, category: &str, month: MonthKey) -> bool {
        self.month == month && self.category == category
    }

    /// Check the invariants a stored record must hold
    pub fn is_well_formed(&self) -> bool {
        self.amount.is_positive()
            && self.amount.is_within_limit()
            && !self.category.trim().is_empty()
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.month, self.category, self.amount)
    }
}
