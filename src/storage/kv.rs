//! Key-value storage backends
//!
//! Each key holds one serialized document. [`FileStore`] keeps one JSON file
//! per key under a directory; [`MemoryStore`] keeps everything in a map and
//! is what the tests use.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::debug;

use super::file_io::{read_text, write_atomic};
use crate::error::{TrackerError, TrackerResult};

/// Minimal string key-value storage
pub trait KeyValueStore {
    /// The document stored under `key`, `None` if nothing was ever written
    fn get(&self, key: &str) -> TrackerResult<Option<String>>;

    /// Replace the document stored under `key`
    fn set(&mut self, key: &str, value: String) -> TrackerResult<()>;
}

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        let path = self.path_for(key);
        debug!(path = %path.display(), "Reading stored document");
        read_text(path)
    }

    fn set(&mut self, key: &str, value: String) -> TrackerResult<()> {
        let path = self.path_for(key);
        debug!(path = %path.display(), bytes = value.len(), "Writing stored document");
        write_atomic(path, value.as_bytes())
    }
}

/// In-memory storage, optionally refusing every write
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail, like a full or read-only disk
    pub fn failing_writes() -> Self {
        Self {
            entries: HashMap::new(),
            fail_writes: true,
        }
    }

    /// Seed a raw document, bypassing the write-failure switch
    pub fn with_entry(mut self, key: &str, value: impl Into<String>) -> Self {
        self.entries.insert(key.to_string(), value.into());
        self
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> TrackerResult<()> {
        if self.fail_writes {
            return Err(TrackerError::Storage(format!(
                "Storage is not writable (key '{}')",
                key
            )));
        }
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path().join("data"));

        assert_eq!(store.get("budgets").unwrap(), None);
        store.set("budgets", "[]".to_string()).unwrap();

        assert_eq!(store.get("budgets").unwrap().as_deref(), Some("[]"));
        assert!(temp_dir.path().join("data").join("budgets.json").exists());
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        store.set("k", "v".to_string()).unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn test_memory_store_failing_writes() {
        let mut store = MemoryStore::failing_writes().with_entry("k", "old");
        assert!(store.set("k", "new".to_string()).is_err());
        assert_eq!(store.raw("k"), Some("old"));

        store.set_fail_writes(false);
        store.set("k", "new".to_string()).unwrap();
        assert_eq!(store.raw("k"), Some("new"));
    }
}
