//! Transaction model
//!
//! A single income or expense event. Records are only ever built from a
//! validated [`TransactionInput`], so a stored transaction always has a
//! positive amount, a non-empty category and a date that was not in the
//! future when it was entered.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;
use super::month::MonthKey;
use crate::forms::{Field, FieldErrors, AMOUNT_TOO_LARGE};

/// Category name used when a record carries no category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(format!(
                "Unknown transaction type '{}', expected income or expense",
                other
            )),
        }
    }
}

/// Validated field values for creating or replacing a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionInput {
    kind: TransactionType,
    amount: Money,
    category: String,
    date: NaiveDate,
}

impl TransactionInput {
    /// Validate raw values against the record invariants
    ///
    /// Every violated rule is reported, keyed by field.
    pub fn new(
        kind: TransactionType,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<Self, FieldErrors> {
        let category: String = category.into();
        let category = category.trim().to_string();
        let mut errors = FieldErrors::new();

        if !amount.is_positive() {
            errors.insert(Field::Amount, "Amount must be greater than 0");
        } else if !amount.is_within_limit() {
            errors.insert(Field::Amount, AMOUNT_TOO_LARGE);
        }
        if category.is_empty() {
            errors.insert(Field::Category, "Category is required");
        }
        if date > today {
            errors.insert(Field::Date, "Date cannot be in the future");
        }

        errors.into_result(Self {
            kind,
            amount,
            category,
            date,
        })
    }

    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// A financial transaction as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Always positive; the direction comes from `kind`
    pub amount: Money,

    /// Category name
    #[serde(default)]
    pub category: String,

    /// Calendar date of the transaction
    pub date: NaiveDate,
}

impl Transaction {
    /// Create a new transaction with a fresh id
    pub fn new(input: TransactionInput) -> Self {
        Self::with_id(TransactionId::new(), input)
    }

    /// Build a transaction that keeps an existing id (used for edits)
    pub fn with_id(id: TransactionId, input: TransactionInput) -> Self {
        Self {
            id,
            kind: input.kind,
            amount: input.amount,
            category: input.category,
            date: input.date,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// The month this transaction falls in
    pub fn month(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }

    /// Category for grouping, with blanks mapped to "Uncategorized"
    pub fn category_or_default(&self) -> &str {
        let trimmed = self.category.trim();
        if trimmed.is_empty() {
            UNCATEGORIZED
        } else {
            trimmed
        }
    }

    /// Check the invariants a stored record must hold
    pub fn is_well_formed(&self) -> bool {
        self.amount.is_positive() && self.amount.is_within_limit()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) {}",
            self.date.format("%Y-%m-%d"),
            self.category_or_default(),
            self.kind,
            self.amount
        )
    }
}
