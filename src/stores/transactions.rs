//! Transaction store
//!
//! Holds transactions in creation order. The list view order (newest date
//! first, newest creation first within a date) is derived on demand.

use tracing::info;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Transaction, TransactionId, TransactionInput};

/// In-memory collection of transactions, oldest created first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap records that were loaded from storage
    pub fn from_records(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Records in creation order
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Append a new transaction built from validated input
    pub fn create(&mut self, input: TransactionInput) -> &Transaction {
        let txn = Transaction::new(input);
        info!(id = %txn.id, kind = %txn.kind, amount = %txn.amount, "Transaction created");
        self.transactions.push(txn);
        &self.transactions[self.transactions.len() - 1]
    }

    /// Replace the record with `id`, keeping its id and position
    pub fn update(
        &mut self,
        id: TransactionId,
        input: TransactionInput,
    ) -> TrackerResult<&Transaction> {
        let index = self
            .position(id)
            .ok_or_else(|| TrackerError::transaction_not_found(id.to_string()))?;

        self.transactions[index] = Transaction::with_id(id, input);
        info!(id = %id, "Transaction updated");
        Ok(&self.transactions[index])
    }

    /// Remove the record with `id`
    pub fn delete(&mut self, id: TransactionId) -> TrackerResult<Transaction> {
        let index = self
            .position(id)
            .ok_or_else(|| TrackerError::transaction_not_found(id.to_string()))?;

        let removed = self.transactions.remove(index);
        info!(id = %id, "Transaction deleted");
        Ok(removed)
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TransactionId) -> bool {
        self.position(id).is_some()
    }

    /// Look up a record by full id, short id or unambiguous id prefix
    pub fn find(&self, identifier: &str) -> TrackerResult<&Transaction> {
        let mut matches = self.transactions.iter().filter(|t| t.id.matches(identifier));

        match (matches.next(), matches.next()) {
            (Some(txn), None) => Ok(txn),
            (None, _) => Err(TrackerError::transaction_not_found(identifier)),
            (Some(_), Some(_)) => Err(TrackerError::Validation(format!(
                "Transaction id '{}' is ambiguous, use more characters",
                identifier
            ))),
        }
    }

    /// Newest date first; same-date records newest created first
    pub fn sorted(&self) -> Vec<&Transaction> {
        let mut sorted: Vec<&Transaction> = self.transactions.iter().rev().collect();
        // Stable sort keeps the reversed creation order within a date
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    /// The `count` most recently created records, newest first
    pub fn recent(&self, count: usize) -> Vec<&Transaction> {
        self.transactions.iter().rev().take(count).collect()
    }

    fn position(&self, id: TransactionId) -> Option<usize> {
        self.transactions.iter().position(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionType};
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn input(cents: i64, category: &str, day: u32) -> TransactionInput {
        TransactionInput::new(
            TransactionType::Expense,
            Money::from_cents(cents),
            category,
            date(day),
            date(31),
        )
        .unwrap()
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let mut store = TransactionStore::new();
        let a = store.create(input(100, "Food", 1)).id;
        let b = store.create(input(100, "Food", 1)).id;

        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut store = TransactionStore::new();
        let first = store.create(input(100, "Food", 1)).id;
        store.create(input(200, "Rent", 2));

        let updated = store.update(first, input(150, "Bills", 3)).unwrap();
        assert_eq!(updated.id, first);
        assert_eq!(updated.category, "Bills");
        assert_eq!(store.all()[0].amount.cents(), 150);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let mut store = TransactionStore::new();
        store.create(input(100, "Food", 1));

        let err = store.update(TransactionId::new(), input(1, "X", 1)).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.all()[0].amount.cents(), 100);
    }

    #[test]
    fn test_delete() {
        let mut store = TransactionStore::new();
        let id = store.create(input(100, "Food", 1)).id;

        assert_eq!(store.delete(id).unwrap().id, id);
        assert!(store.is_empty());
        assert!(store.delete(id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_sorted_newest_first_with_creation_tiebreak() {
        let mut store = TransactionStore::new();
        let old = store.create(input(1, "A", 1)).id;
        let same_day_first = store.create(input(2, "B", 5)).id;
        let same_day_second = store.create(input(3, "C", 5)).id;
        let newest = store.create(input(4, "D", 9)).id;

        let ids: Vec<_> = store.sorted().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![newest, same_day_second, same_day_first, old]);
    }

    #[test]
    fn test_recent_is_by_creation() {
        let mut store = TransactionStore::new();
        let a = store.create(input(1, "A", 9)).id;
        let b = store.create(input(2, "B", 1)).id;
        let c = store.create(input(3, "C", 5)).id;

        let ids: Vec<_> = store.recent(2).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![c, b]);
        assert_eq!(store.recent(10).len(), 3);
        assert_eq!(store.recent(10)[2].id, a);
    }

    #[test]
    fn test_find_by_short_id() {
        let mut store = TransactionStore::new();
        let id = store.create(input(100, "Food", 1)).id;

        assert_eq!(store.find(&id.to_string()).unwrap().id, id);
        assert_eq!(store.find(&id.as_uuid().to_string()).unwrap().id, id);
        assert!(store.find("txn-zzzz").unwrap_err().is_not_found());
    }
}
