//! Loading and saving record collections under a storage key
//!
//! A collection is stored as a JSON array. Loading never fails: a missing
//! document is an empty collection, a malformed one is logged and treated
//! as empty, and individual records that don't parse or fail `is_valid` are
//! dropped with a warning.

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use super::kv::KeyValueStore;
use crate::error::TrackerResult;

/// Key holding the transaction collection
pub const TRANSACTIONS_KEY: &str = "transactions";

/// Key holding the budget collection
pub const BUDGETS_KEY: &str = "budgets";

/// Read the collection under `key`, keeping only records that pass `is_valid`
pub fn load_collection<T, S, F>(store: &S, key: &str, is_valid: F) -> Vec<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
    F: Fn(&T) -> bool,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key, "No stored collection, starting empty");
            return Vec::new();
        }
        Err(e) => {
            warn!(key, error = %e, "Failed to read stored collection, starting empty");
            return Vec::new();
        }
    };

    let values: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
        Ok(values) => values,
        Err(e) => {
            warn!(key, error = %e, "Stored collection is malformed, starting empty");
            return Vec::new();
        }
    };

    let total = values.len();
    let records: Vec<T> = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<T>(value) {
            Ok(record) if is_valid(&record) => Some(record),
            Ok(_) => {
                warn!(key, index, "Skipping stored record with invalid values");
                None
            }
            Err(e) => {
                warn!(key, index, error = %e, "Skipping unreadable stored record");
                None
            }
        })
        .collect();

    debug!(key, loaded = records.len(), total, "Loaded stored collection");
    records
}

/// Replace the collection under `key` with `records`
pub fn save_collection<T, S>(store: &mut S, key: &str, records: &[T]) -> TrackerResult<()>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_string_pretty(records)?;
    store.set(key, json)?;
    debug!(key, count = records.len(), "Saved collection");
    Ok(())
}
