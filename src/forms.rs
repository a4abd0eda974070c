//! Form input and per-field validation
//!
//! Forms hold raw user input as typed (strings). Validating a form either
//! yields a validated input record ready for a store, or a set of messages
//! keyed by the field they belong to. Validation never panics and never
//! touches the stores.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;

use crate::models::money::MoneyParseError;
use crate::models::{
    default_category, BudgetInput, Money, MonthKey, Transaction, TransactionInput,
    TransactionType, BUDGET_CATEGORIES,
};

/// Form fields that can carry a validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Amount,
    Category,
    Date,
    Month,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Amount => "amount",
            Self::Category => "category",
            Self::Date => "date",
            Self::Month => "month",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation messages keyed by field; the first message for a field wins
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message unless the field already has one
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// Add the messages of `other` for fields that have none yet
    pub fn merge(&mut self, other: &FieldErrors) {
        for (field, message) in other.iter() {
            self.insert(field, message);
        }
    }

    /// `Ok(value)` when no messages were recorded
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

/// Raw input for creating or editing a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionForm {
    pub amount: String,
    pub kind: TransactionType,
    /// Date as typed, `YYYY-MM-DD`
    pub date: String,
    pub category: String,
}

impl TransactionForm {
    /// A blank expense form dated today
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            amount: String::new(),
            kind: TransactionType::Expense,
            date: today.format("%Y-%m-%d").to_string(),
            category: default_category(TransactionType::Expense).to_string(),
        }
    }

    /// A form pre-filled from a stored transaction
    pub fn from_transaction(txn: &Transaction) -> Self {
        Self {
            amount: txn.amount.to_decimal_string(),
            kind: txn.kind,
            date: txn.date.format("%Y-%m-%d").to_string(),
            category: txn.category.clone(),
        }
    }

    /// Switch the type, resetting the category to the new type's default
    pub fn set_kind(&mut self, kind: TransactionType) {
        if self.kind != kind {
            self.kind = kind;
            self.category = default_category(kind).to_string();
        }
    }

    /// Validate against the record invariants, with `today` as the latest allowed date
    pub fn validate(&self, today: NaiveDate) -> Result<TransactionInput, FieldErrors> {
        let mut errors = FieldErrors::new();

        let amount = match parse_amount(&self.amount) {
            Ok(amount) => Some(amount),
            Err(message) => {
                errors.insert(Field::Amount, message);
                None
            }
        };

        let date = match parse_date(&self.date) {
            Ok(date) => Some(date),
            Err(message) => {
                errors.insert(Field::Date, message);
                None
            }
        };

        // Fields that failed to parse get stand-ins that pass their own
        // rules, so the remaining rules are still checked and reported
        let checked = TransactionInput::new(
            self.kind,
            amount.unwrap_or(Money::from_cents(1)),
            self.category.as_str(),
            date.unwrap_or(today),
            today,
        );

        match checked {
            Ok(input) if errors.is_empty() => Ok(input),
            Ok(_) => Err(errors),
            Err(rule_errors) => {
                errors.merge(&rule_errors);
                Err(errors)
            }
        }
    }
}

/// Raw input for setting a monthly budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetForm {
    pub category: String,
    pub amount: String,
    /// Month as typed, `YYYY-MM`
    pub month: String,
}

impl BudgetForm {
    /// A blank form for the given month
    pub fn blank(month: MonthKey) -> Self {
        Self {
            category: BUDGET_CATEGORIES[0].to_string(),
            amount: String::new(),
            month: month.to_string(),
        }
    }

    pub fn validate(&self) -> Result<BudgetInput, FieldErrors> {
        let mut errors = FieldErrors::new();

        let amount = match parse_amount(&self.amount) {
            Ok(amount) if amount.is_positive() => Some(amount),
            Ok(_) | Err(AMOUNT_NOT_A_NUMBER) => {
                errors.insert(Field::Amount, "Amount must be a positive number");
                None
            }
            Err(message) => {
                errors.insert(Field::Amount, message);
                None
            }
        };

        let month = if self.month.trim().is_empty() {
            errors.insert(Field::Month, "Month is required");
            None
        } else {
            match MonthKey::parse(&self.month) {
                Ok(month) => Some(month),
                Err(_) => {
                    errors.insert(Field::Month, "Month must be in YYYY-MM format");
                    None
                }
            }
        };

        let (Some(amount), Some(month)) = (amount, month) else {
            if self.category.trim().is_empty() {
                errors.insert(Field::Category, "Category is required");
            }
            return Err(errors);
        };

        BudgetInput::new(self.category.as_str(), amount, month)
    }
}

const AMOUNT_REQUIRED: &str = "Amount is required";
const AMOUNT_NOT_A_NUMBER: &str = "Amount must be a number";
pub(crate) const AMOUNT_TOO_LARGE: &str = "Amount is too large";

fn parse_amount(raw: &str) -> Result<Money, &'static str> {
    if raw.trim().is_empty() {
        return Err(AMOUNT_REQUIRED);
    }
    Money::parse(raw).map_err(|e| match e {
        MoneyParseError::TooLarge(_) => AMOUNT_TOO_LARGE,
        MoneyParseError::InvalidFormat(_) => AMOUNT_NOT_A_NUMBER,
    })
}

fn parse_date(raw: &str) -> Result<NaiveDate, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Date is required");
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| "Date must be in YYYY-MM-DD format")
}
