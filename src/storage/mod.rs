//! Storage layer
//!
//! Key-value persistence for the record collections: a file-backed store
//! with atomic writes, an in-memory store, and the helpers that turn a
//! stored JSON array into validated records and back.

pub mod collection;
pub mod file_io;
pub mod kv;

pub use collection::{load_collection, save_collection, BUDGETS_KEY, TRANSACTIONS_KEY};
pub use file_io::{read_text, write_atomic, write_json_atomic};
pub use kv::{FileStore, KeyValueStore, MemoryStore};

use crate::config::paths::TrackerPaths;
use crate::error::TrackerError;

/// Open the file store under the configured data directory
pub fn open_file_store(paths: &TrackerPaths) -> Result<FileStore, TrackerError> {
    paths.ensure_directories()?;
    Ok(FileStore::new(paths.data_dir()))
}
