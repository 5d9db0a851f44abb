//! Bicycle inventory store.
//!
//! Owns the ordered list of bicycles and its backing file. Every successful
//! mutation rewrites the whole file; there are no incremental writes.
//!
//! Loading is lenient: the first malformed line silently ends the load and
//! all following lines are ignored (they are lost on the next save). Only a
//! `warn` log entry records where the load stopped.

mod codec;
mod error;

pub use error::InventoryError;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::state::{BicycleRecord, BicycleType, UnknownBicycleType};

/// In-memory fleet backed by a flat text file.
#[derive(Debug)]
pub struct InventoryStore {
    path: PathBuf,
    capacity: usize,
    bicycles: Vec<BicycleRecord>,
}

impl InventoryStore {
    /// Empty store that will persist to `path`. Nothing is read or written.
    pub fn new(path: impl Into<PathBuf>, capacity: usize) -> Self {
        Self {
            path: path.into(),
            capacity,
            bicycles: Vec::new(),
        }
    }

    /// Load the store from `path`.
    ///
    /// A missing file yields an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::PersistenceReadFailure`] if the file exists
    /// but cannot be read.
    pub fn load(path: impl Into<PathBuf>, capacity: usize) -> Result<Self, InventoryError> {
        let mut store = Self::new(path, capacity);

        let content = match fs::read(&store.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %store.path.display(), "no backing file yet, starting empty");
                return Ok(store);
            }
            Err(source) => {
                return Err(InventoryError::PersistenceReadFailure {
                    path: store.path,
                    source,
                })
            }
        };

        let decoded = codec::decode(&content, capacity);
        if let Some(line) = decoded.stopped_at {
            warn!(
                path = %store.path.display(),
                line,
                "malformed record, ignoring the rest of the file"
            );
        }
        store.bicycles = decoded.records;
        info!(
            path = %store.path.display(),
            count = store.bicycles.len(),
            "inventory loaded"
        );
        Ok(store)
    }

    /// Rewrite the backing file with the full store.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::PersistenceWriteFailure`] if the file (or its
    /// parent directory) cannot be written. The in-memory store is untouched.
    pub fn save(&self) -> Result<(), InventoryError> {
        let write_failure = |source: std::io::Error| InventoryError::PersistenceWriteFailure {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_failure)?;
        }
        fs::write(&self.path, codec::encode(&self.bicycles)).map_err(write_failure)?;

        debug!(path = %self.path.display(), count = self.bicycles.len(), "inventory saved");
        Ok(())
    }

    /// Add a bicycle and return its 1-based display index.
    ///
    /// # Errors
    ///
    /// - [`InventoryError::CapacityExceeded`] when the fleet is full.
    /// - [`InventoryError::InvalidType`] when `kind` is not on the allow-list.
    /// - [`InventoryError::InvalidLocation`] when `location` is empty or has
    ///   whitespace.
    /// - [`InventoryError::PersistenceWriteFailure`] when saving fails; the
    ///   bicycle stays in memory.
    pub fn add(&mut self, kind: &str, location: &str) -> Result<usize, InventoryError> {
        if self.bicycles.len() >= self.capacity {
            debug!(capacity = self.capacity, "add rejected: fleet full");
            return Err(InventoryError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        let kind: BicycleType = kind.parse().map_err(|e: UnknownBicycleType| {
            debug!(kind = %e.0, "add rejected: unknown type");
            InventoryError::InvalidType(e.0)
        })?;
        if location.is_empty() || location.chars().any(char::is_whitespace) {
            debug!(location, "add rejected: bad location");
            return Err(InventoryError::InvalidLocation(location.to_string()));
        }

        self.bicycles.push(BicycleRecord::new(kind, location));
        let index = self.bicycles.len();
        info!(index, kind = %kind, location, "bicycle added");

        self.persist()?;
        Ok(index)
    }

    /// Mark the bicycle at `index` (1-based) as borrowed.
    ///
    /// # Errors
    ///
    /// [`InventoryError::InvalidIndex`], [`InventoryError::NotAvailable`], or
    /// [`InventoryError::PersistenceWriteFailure`] (the change is kept).
    pub fn borrow(&mut self, index: usize) -> Result<BicycleRecord, InventoryError> {
        let slot = self.slot(index)?;
        if !self.bicycles[slot].available {
            debug!(index, "borrow rejected: already borrowed");
            return Err(InventoryError::NotAvailable(index));
        }

        self.bicycles[slot].available = false;
        info!(index, "bicycle borrowed");

        self.persist()?;
        Ok(self.bicycles[slot].clone())
    }

    /// Mark the bicycle at `index` (1-based) as returned.
    ///
    /// # Errors
    ///
    /// [`InventoryError::InvalidIndex`], [`InventoryError::NotBorrowed`], or
    /// [`InventoryError::PersistenceWriteFailure`] (the change is kept).
    pub fn give_back(&mut self, index: usize) -> Result<BicycleRecord, InventoryError> {
        let slot = self.slot(index)?;
        if self.bicycles[slot].available {
            debug!(index, "return rejected: not borrowed");
            return Err(InventoryError::NotBorrowed(index));
        }

        self.bicycles[slot].available = true;
        info!(index, "bicycle returned");

        self.persist()?;
        Ok(self.bicycles[slot].clone())
    }

    /// Records paired with their 1-based display index, in insertion order.
    pub fn list(&self) -> impl Iterator<Item = (usize, &BicycleRecord)> + '_ {
        self.bicycles.iter().enumerate().map(|(i, b)| (i + 1, b))
    }

    /// Record at a 1-based display index.
    pub fn get(&self, index: usize) -> Option<&BicycleRecord> {
        index.checked_sub(1).and_then(|i| self.bicycles.get(i))
    }

    pub fn len(&self) -> usize {
        self.bicycles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bicycles.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.bicycles.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn available_count(&self) -> usize {
        self.bicycles.iter().filter(|b| b.available).count()
    }

    pub fn borrowed_count(&self) -> usize {
        self.len() - self.available_count()
    }

    /// Translate a 1-based display index into a vector slot.
    fn slot(&self, index: usize) -> Result<usize, InventoryError> {
        if index == 0 || index > self.bicycles.len() {
            debug!(index, count = self.bicycles.len(), "rejected: index out of range");
            return Err(InventoryError::InvalidIndex {
                index,
                count: self.bicycles.len(),
            });
        }
        Ok(index - 1)
    }

    /// Save after a mutation. On failure the mutation stays in memory.
    fn persist(&self) -> Result<(), InventoryError> {
        self.save().map_err(|e| {
            error!(error = %e, "inventory not saved, disk copy is stale");
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, InventoryStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = InventoryStore::new(dir.path().join("bicycles.txt"), 100);
        (dir, store)
    }

    fn snapshot(store: &InventoryStore) -> Vec<(usize, BicycleRecord)> {
        store.list().map(|(i, b)| (i, b.clone())).collect()
    }

    #[test]
    fn test_add_appends_available_record() {
        let (_dir, mut store) = temp_store();
        for (n, kind) in ["city", "courier", "mountain", "flat"].iter().enumerate() {
            let index = store.add(kind, "depot").unwrap();
            assert_eq!(index, n + 1);
            assert_eq!(store.len(), n + 1);
            let (last_index, last) = store.list().last().unwrap();
            assert_eq!(last_index, n + 1);
            assert_eq!(last.kind.as_str(), *kind);
            assert!(last.available);
        }
    }

    #[test]
    fn test_add_rejects_unknown_type() {
        let (dir, mut store) = temp_store();
        let err = store.add("hybrid", "depot").unwrap_err();
        assert!(matches!(err, InventoryError::InvalidType(ref t) if t == "hybrid"));
        assert_eq!(store.len(), 0);
        // Rejected adds never touch the disk.
        assert!(!dir.path().join("bicycles.txt").exists());
    }

    #[test]
    fn test_add_rejects_bad_location() {
        let (_dir, mut store) = temp_store();
        assert!(matches!(
            store.add("city", ""),
            Err(InventoryError::InvalidLocation(_))
        ));
        assert!(matches!(
            store.add("city", "main street"),
            Err(InventoryError::InvalidLocation(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_rejects_when_full() {
        let (_dir, mut store) = temp_store();
        for i in 0..100 {
            store.add("city", &format!("slot-{i}")).unwrap();
        }
        assert!(store.is_full());
        let err = store.add("city", "overflow").unwrap_err();
        assert!(matches!(err, InventoryError::CapacityExceeded { capacity: 100 }));
        assert_eq!(store.len(), 100);
    }

    #[test]
    fn test_capacity_checked_before_type() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = InventoryStore::new(dir.path().join("b.txt"), 0);
        assert!(matches!(
            store.add("hybrid", "x"),
            Err(InventoryError::CapacityExceeded { capacity: 0 })
        ));
    }

    #[test]
    fn test_borrow_then_borrow_again() {
        let (_dir, mut store) = temp_store();
        store.add("city", "a").unwrap();
        let bike = store.borrow(1).unwrap();
        assert!(!bike.available);

        let before = snapshot(&store);
        assert!(matches!(store.borrow(1), Err(InventoryError::NotAvailable(1))));
        assert_eq!(snapshot(&store), before);
    }

    #[test]
    fn test_return_then_return_again() {
        let (_dir, mut store) = temp_store();
        store.add("flat", "a").unwrap();
        store.borrow(1).unwrap();
        let bike = store.give_back(1).unwrap();
        assert!(bike.available);
        assert!(matches!(store.give_back(1), Err(InventoryError::NotBorrowed(1))));
        assert!(store.get(1).unwrap().available);
    }

    #[test]
    fn test_out_of_range_index() {
        let (_dir, mut store) = temp_store();
        store.add("city", "a").unwrap();
        store.add("city", "b").unwrap();
        let count = store.len();
        for index in [0, count + 1] {
            assert!(matches!(
                store.borrow(index),
                Err(InventoryError::InvalidIndex { count: 2, .. })
            ));
            assert!(matches!(
                store.give_back(index),
                Err(InventoryError::InvalidIndex { count: 2, .. })
            ));
        }
    }

    #[test]
    fn test_example_scenario() {
        let (_dir, mut store) = temp_store();
        assert_eq!(store.add("mountain", "depot-1").unwrap(), 1);

        let expected = |available| {
            vec![(
                1,
                BicycleRecord {
                    kind: BicycleType::Mountain,
                    location: "depot-1".to_string(),
                    available,
                },
            )]
        };
        assert_eq!(snapshot(&store), expected(true));
        store.borrow(1).unwrap();
        assert_eq!(snapshot(&store), expected(false));
        store.give_back(1).unwrap();
        assert_eq!(snapshot(&store), expected(true));
    }

    #[test]
    fn test_save_load_round_trip() {
        let (dir, mut store) = temp_store();
        store.add("city", "north").unwrap();
        store.add("courier", "hub-2").unwrap();
        store.add("mountain", "trail").unwrap();
        store.borrow(2).unwrap();
        store.save().unwrap();

        let loaded = InventoryStore::load(dir.path().join("bicycles.txt"), 100).unwrap();
        assert_eq!(snapshot(&loaded), snapshot(&store));
    }

    #[test]
    fn test_mutations_persist_immediately() {
        let (dir, mut store) = temp_store();
        let path = dir.path().join("bicycles.txt");
        store.add("courier", "hub").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "courier hub 1\n");
        store.borrow(1).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "courier hub 0\n");
        store.give_back(1).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "courier hub 1\n");
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = InventoryStore::load(dir.path().join("nope.txt"), 100).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.capacity(), 100);
    }

    #[test]
    fn test_load_truncates_at_malformed_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bicycles.txt");
        fs::write(&path, "city a 1\ncity b\nflat c 0\n").unwrap();

        let store = InventoryStore::load(&path, 100).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(1).unwrap().location, "a");
    }

    #[test]
    fn test_load_non_utf8_line_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bicycles.txt");
        fs::write(&path, b"city a 1\nflat b 0\ncity caf\xe9 1\ncourier c 1\n").unwrap();

        let store = InventoryStore::load(&path, 100).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(2).unwrap().location, "b");
    }

    #[test]
    fn test_load_stops_at_capacity() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bicycles.txt");
        fs::write(&path, "city a 1\ncity b 1\ncity c 1\n").unwrap();

        let store = InventoryStore::load(&path, 2).unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.is_full());
    }

    #[test]
    fn test_load_directory_is_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = InventoryStore::load(dir.path(), 100).unwrap_err();
        assert!(matches!(err, InventoryError::PersistenceReadFailure { .. }));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("bicycles.txt");
        let mut store = InventoryStore::new(&path, 100);
        store.add("flat", "x").unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn test_write_failure_keeps_mutation() {
        let dir = tempfile::tempdir().unwrap();
        // The backing "file" is a directory, so every write fails.
        let mut store = InventoryStore::new(dir.path(), 100);

        let err = store.add("city", "a").unwrap_err();
        assert!(err.is_unsaved_change());
        assert_eq!(store.len(), 1);

        let err = store.borrow(1).unwrap_err();
        assert!(matches!(err, InventoryError::PersistenceWriteFailure { .. }));
        assert!(!store.get(1).unwrap().available);

        let err = store.give_back(1).unwrap_err();
        assert!(matches!(err, InventoryError::PersistenceWriteFailure { .. }));
        assert!(store.get(1).unwrap().available);
    }

    #[test]
    fn test_counts_and_get() {
        let (_dir, mut store) = temp_store();
        store.add("city", "a").unwrap();
        store.add("city", "b").unwrap();
        store.add("city", "c").unwrap();
        store.borrow(3).unwrap();
        assert_eq!(store.available_count(), 2);
        assert_eq!(store.borrowed_count(), 1);
        assert!(store.get(0).is_none());
        assert!(store.get(4).is_none());
        assert_eq!(store.get(3).unwrap().location, "c");
    }
}
