//! The state holder
//!
//! [`Tracker`] owns both record stores, the transaction edit state, the
//! list pager and the notification slot. Every accepted mutation is followed
//! by a write of the affected collection to storage. A failed write is
//! logged and surfaced as a warning notification; the in-memory state stays
//! authoritative.

use std::time::Instant;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::config::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::forms::{BudgetForm, TransactionForm};
use crate::models::{Budget, BudgetId, Transaction, TransactionId};
use crate::notification::{Notification, NotificationKind, NotificationSlot};
use crate::pagination::Pager;
use crate::storage::{
    load_collection, save_collection, KeyValueStore, BUDGETS_KEY, TRANSACTIONS_KEY,
};
use crate::stores::{BudgetStore, TransactionStore, UpsertOutcome};

/// Whether the transaction form is creating a new record or editing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing(TransactionId),
}

/// What an accepted transaction submission did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(TransactionId),
    Updated(TransactionId),
}

impl SubmitOutcome {
    pub fn id(&self) -> TransactionId {
        match self {
            Self::Created(id) | Self::Updated(id) => *id,
        }
    }
}

/// Application state over a key-value storage backend
#[derive(Debug)]
pub struct Tracker<S: KeyValueStore> {
    storage: S,
    transactions: TransactionStore,
    budgets: BudgetStore,
    edit: EditState,
    pager: Pager,
    notifications: NotificationSlot,
}

impl<S: KeyValueStore> Tracker<S> {
    /// Read both collections from `storage`
    ///
    /// Missing or unreadable data starts out empty; see
    /// [`load_collection`] for how bad records are handled.
    pub fn load(storage: S, settings: &Settings) -> Self {
        let transactions: Vec<Transaction> =
            load_collection(&storage, TRANSACTIONS_KEY, Transaction::is_well_formed);
        let budgets: Vec<Budget> = load_collection(&storage, BUDGETS_KEY, Budget::is_well_formed);

        info!(
            transactions = transactions.len(),
            budgets = budgets.len(),
            "Loaded tracker state"
        );

        Self {
            storage,
            transactions: TransactionStore::from_records(transactions),
            budgets: BudgetStore::from_records(budgets),
            edit: EditState::Idle,
            pager: Pager::new(settings.page_size),
            notifications: NotificationSlot::new(settings.notification_duration()),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Transactions in creation order
    pub fn transactions(&self) -> &[Transaction] {
        self.transactions.all()
    }

    pub fn transaction_store(&self) -> &TransactionStore {
        &self.transactions
    }

    pub fn budgets(&self) -> &[Budget] {
        self.budgets.all()
    }

    pub fn budget_store(&self) -> &BudgetStore {
        &self.budgets
    }

    // --- Transaction form ---

    pub fn edit_state(&self) -> EditState {
        self.edit
    }

    /// Start editing `id`, returning the form pre-filled from the record
    pub fn begin_edit(&mut self, id: TransactionId) -> TrackerResult<TransactionForm> {
        let txn = self
            .transactions
            .get(id)
            .ok_or_else(|| TrackerError::transaction_not_found(id.to_string()))?;

        let form = TransactionForm::from_transaction(txn);
        self.edit = EditState::Editing(id);
        Ok(form)
    }

    pub fn cancel_edit(&mut self) {
        self.edit = EditState::Idle;
    }

    /// Submit the transaction form
    ///
    /// Creates a record when idle and replaces the edited record otherwise.
    /// A validation failure leaves the edit state untouched; an edit whose
    /// record has disappeared fails with not-found and returns to idle.
    pub fn submit_transaction(
        &mut self,
        form: &TransactionForm,
        today: NaiveDate,
    ) -> TrackerResult<SubmitOutcome> {
        let input = form.validate(today)?;

        let outcome = match self.edit {
            EditState::Idle => {
                let id = self.transactions.create(input).id;
                self.notify("Transaction added", NotificationKind::Success);
                SubmitOutcome::Created(id)
            }
            EditState::Editing(id) => {
                self.edit = EditState::Idle;
                self.transactions.update(id, input)?;
                self.notify("Transaction updated", NotificationKind::Success);
                SubmitOutcome::Updated(id)
            }
        };

        self.persist_transactions();
        Ok(outcome)
    }

    pub fn delete_transaction(&mut self, id: TransactionId) -> TrackerResult<Transaction> {
        let removed = self.transactions.delete(id)?;
        self.pager.clamp(self.transactions.len());
        self.notify("Transaction deleted successfully", NotificationKind::Success);
        self.persist_transactions();
        Ok(removed)
    }

    // --- Budgets ---

    /// Set the budget described by `form`, replacing one for the same slot
    pub fn set_budget(&mut self, form: &BudgetForm) -> TrackerResult<UpsertOutcome> {
        let input = form.validate()?;
        let outcome = self.budgets.upsert(input);

        let message = if outcome.is_replaced() {
            "Budget updated"
        } else {
            "Budget set"
        };
        self.notify(message, NotificationKind::Success);
        self.persist_budgets();
        Ok(outcome)
    }

    pub fn delete_budget(&mut self, id: BudgetId) -> TrackerResult<Budget> {
        let removed = self.budgets.delete(id)?;
        self.notify("Budget deleted", NotificationKind::Success);
        self.persist_budgets();
        Ok(removed)
    }

    // --- Transaction list ---

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Transactions on the current page, newest first
    pub fn current_page(&self) -> Vec<&Transaction> {
        let sorted = self.transactions.sorted();
        self.pager.slice(&sorted).to_vec()
    }

    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.transactions.len())
    }

    pub fn next_page(&mut self) -> bool {
        self.pager.next(self.transactions.len())
    }

    pub fn previous_page(&mut self) -> bool {
        self.pager.previous()
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.pager.go_to(page, self.transactions.len());
    }

    // --- Notifications ---

    /// The notification visible at `now`, if it hasn't expired
    pub fn notification_at(&mut self, now: Instant) -> Option<&Notification> {
        self.notifications.active_at(now)
    }

    /// The most recent notification regardless of expiry
    pub fn latest_notification(&self) -> Option<&Notification> {
        self.notifications.latest()
    }

    pub fn dismiss_notification(&mut self) {
        self.notifications.dismiss();
    }

    fn notify(&mut self, message: &str, kind: NotificationKind) {
        self.notifications.show(message, kind);
    }

    // --- Persistence ---

    fn persist_transactions(&mut self) {
        let result = save_collection(&mut self.storage, TRANSACTIONS_KEY, self.transactions.all());
        if let Err(e) = result {
            self.storage_failed(TRANSACTIONS_KEY, &e);
        }
    }

    fn persist_budgets(&mut self) {
        if let Err(e) = save_collection(&mut self.storage, BUDGETS_KEY, self.budgets.all()) {
            self.storage_failed(BUDGETS_KEY, &e);
        }
    }

    fn storage_failed(&mut self, key: &str, error: &TrackerError) {
        warn!(key, error = %error, "Failed to save, changes are kept in memory only");
        self.notify(
            &format!("Could not save {}: {}", key, error),
            NotificationKind::Warning,
        );
    }
}
