//! File-backed snapshot storage.
//!
//! Each namespace maps to `<dir>/<namespace>.json`. Writes go to a sibling
//! temp file first and are renamed into place, so a crash mid-write leaves
//! the previous snapshot intact.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::instrument;

use super::{PersistenceError, Snapshot, SnapshotStore, decode, encode};

/// Stores snapshots as JSON files in a data directory.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    dir: PathBuf,
}

impl FileSnapshotStore {
    /// Create a store rooted at `dir`. The directory is created on first save.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the snapshot file for a namespace.
    #[must_use]
    pub fn path_for(&self, namespace: &str) -> PathBuf {
        self.dir.join(format!("{namespace}.json"))
    }

    fn temp_path_for(&self, namespace: &str) -> PathBuf {
        self.dir.join(format!(".{namespace}.json.tmp"))
    }
}

impl SnapshotStore for FileSnapshotStore {
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn load(&self, namespace: &str) -> Result<Option<Snapshot>, PersistenceError> {
        let raw = match fs::read_to_string(self.path_for(namespace)) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No saved snapshot");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        decode(&raw).map(Some)
    }

    #[instrument(skip(self, snapshot), fields(dir = %self.dir.display()))]
    fn save(&mut self, namespace: &str, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        let raw = encode(snapshot)?;
        fs::create_dir_all(&self.dir)?;

        let temp = self.temp_path_for(namespace);
        fs::write(&temp, raw)?;
        fs::rename(&temp, self.path_for(namespace))?;

        tracing::debug!("Saved snapshot");
        Ok(())
    }

    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn clear(&mut self, namespace: &str) -> Result<(), PersistenceError> {
        match fs::remove_file(self.path_for(namespace)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use glassshop_core::ProductId;
    use tempfile::TempDir;

    use super::*;
    use crate::store::CartItem;

    #[test]
    fn test_load_from_missing_dir() {
        let tmp = TempDir::new().unwrap();
        let store = FileSnapshotStore::new(tmp.path().join("missing"));
        assert!(store.load("glassshop-storage").unwrap().is_none());
    }

    #[test]
    fn test_save_creates_dir_and_round_trips() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("data");
        let mut store = FileSnapshotStore::new(&dir);
        let snapshot = Snapshot {
            cart: vec![CartItem {
                product_id: ProductId::new(3),
                quantity: 4,
            }],
            ..Snapshot::default()
        };

        store.save("glassshop-storage", &snapshot).unwrap();
        assert!(dir.join("glassshop-storage.json").exists());
        assert!(!dir.join(".glassshop-storage.json.tmp").exists());
        assert_eq!(store.load("glassshop-storage").unwrap(), Some(snapshot));
    }

    #[test]
    fn test_clear_removes_file() {
        let tmp = TempDir::new().unwrap();
        let mut store = FileSnapshotStore::new(tmp.path());
        store.save("ns", &Snapshot::default()).unwrap();
        store.clear("ns").unwrap();
        assert!(!store.path_for("ns").exists());
        store.clear("ns").unwrap();
    }

    #[test]
    fn test_corrupt_file_errors() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("ns.json"), "{\"state\":").unwrap();

        let store = FileSnapshotStore::new(tmp.path());
        assert!(matches!(store.load("ns"), Err(PersistenceError::Json(_))));
    }
}
