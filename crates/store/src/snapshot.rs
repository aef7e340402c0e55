//! Persistence boundary: string-keyed slots holding serialized snapshots.
//!
//! The store writes the full product list on every mutation; there are no
//! incremental writes. Implementations only decide where the slot lives.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Storage key under which the product list snapshot lives.
pub const PRODUCTS_KEY: &str = "products";

/// Snapshot persistence error.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot storage I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("snapshot payload is not valid JSON: {0}")]
    Codec(#[from] serde_json::Error),
}

/// String-keyed key-value collaborator.
pub trait SnapshotStore {
    /// Read a slot. `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>, SnapshotError>;

    /// Replace a slot.
    fn set(&mut self, key: &str, value: &str) -> Result<(), SnapshotError>;
}

/// In-memory snapshot store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    slots: HashMap<String, String>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate one slot, e.g. to simulate an existing snapshot.
    pub fn with_slot(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.slots.insert(key.to_string(), value.to_string());
        store
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn get(&self, key: &str) -> Result<Option<String>, SnapshotError> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SnapshotError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Durable snapshot store: one `<dir>/<key>.json` file per slot.
#[derive(Debug)]
pub struct JsonFileSnapshotStore {
    dir: PathBuf,
}

impl JsonFileSnapshotStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, SnapshotError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SnapshotStore for JsonFileSnapshotStore {
    fn get(&self, key: &str) -> Result<Option<String>, SnapshotError> {
        match std::fs::read_to_string(self.slot_path(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SnapshotError> {
        std::fs::write(self.slot_path(key), value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_store_round_trips_a_slot() {
        let mut store = InMemorySnapshotStore::new();
        assert!(store.get(PRODUCTS_KEY).unwrap().is_none());

        store.set(PRODUCTS_KEY, "[]").unwrap();
        assert_eq!(store.get(PRODUCTS_KEY).unwrap().as_deref(), Some("[]"));

        store.set(PRODUCTS_KEY, "[1]").unwrap();
        assert_eq!(store.get(PRODUCTS_KEY).unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn file_store_round_trips_a_slot() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut store = JsonFileSnapshotStore::open(dir.path()).unwrap();

        assert!(store.get(PRODUCTS_KEY).unwrap().is_none());
        store.set(PRODUCTS_KEY, r#"[{"id":1}]"#).unwrap();
        assert_eq!(
            store.get(PRODUCTS_KEY).unwrap().as_deref(),
            Some(r#"[{"id":1}]"#)
        );

        // A second store over the same directory sees the same slot.
        let reopened = JsonFileSnapshotStore::open(dir.path()).unwrap();
        assert_eq!(
            reopened.get(PRODUCTS_KEY).unwrap().as_deref(),
            Some(r#"[{"id":1}]"#)
        );
    }

    #[test]
    fn file_store_keeps_slots_apart() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut store = JsonFileSnapshotStore::open(dir.path()).unwrap();

        store.set("products", "a").unwrap();
        store.set("settings", "b").unwrap();
        assert_eq!(store.get("products").unwrap().as_deref(), Some("a"));
        assert_eq!(store.get("settings").unwrap().as_deref(), Some("b"));
    }
}
