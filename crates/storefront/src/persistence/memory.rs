//! In-memory snapshot storage.

use std::collections::HashMap;

use super::{PersistenceError, Snapshot, SnapshotStore, decode, encode};

/// Keeps encoded snapshots in a map, the way browser storage keeps strings.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshotStore {
    entries: HashMap<String, String>,
    saves: usize,
}

impl MemorySnapshotStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful saves so far.
    #[must_use]
    pub const fn save_count(&self) -> usize {
        self.saves
    }

    /// Raw stored value for a namespace.
    #[must_use]
    pub fn raw(&self, namespace: &str) -> Option<&str> {
        self.entries.get(namespace).map(String::as_str)
    }

    /// Store a raw value as-is, bypassing encoding.
    pub fn insert_raw(&mut self, namespace: &str, raw: impl Into<String>) {
        self.entries.insert(namespace.to_string(), raw.into());
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self, namespace: &str) -> Result<Option<Snapshot>, PersistenceError> {
        self.entries.get(namespace).map(|raw| decode(raw)).transpose()
    }

    fn save(&mut self, namespace: &str, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        let raw = encode(snapshot)?;
        self.entries.insert(namespace.to_string(), raw);
        self.saves += 1;
        Ok(())
    }

    fn clear(&mut self, namespace: &str) -> Result<(), PersistenceError> {
        self.entries.remove(namespace);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use glassshop_core::ProductId;

    use super::*;

    #[test]
    fn test_load_missing_namespace() {
        let store = MemorySnapshotStore::new();
        assert!(store.load("glassshop-storage").unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemorySnapshotStore::new();
        let snapshot = Snapshot {
            favorites: vec![ProductId::new(4)],
            ..Snapshot::default()
        };
        store.save("ns", &snapshot).unwrap();
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.load("ns").unwrap(), Some(snapshot));
        assert!(store.load("other").unwrap().is_none());
    }

    #[test]
    fn test_clear() {
        let mut store = MemorySnapshotStore::new();
        store.save("ns", &Snapshot::default()).unwrap();
        store.clear("ns").unwrap();
        assert!(store.raw("ns").is_none());
        store.clear("ns").unwrap();
    }

    #[test]
    fn test_corrupt_raw_value_errors() {
        let mut store = MemorySnapshotStore::new();
        store.insert_raw("ns", "{broken");
        assert!(store.load("ns").is_err());
    }
}
