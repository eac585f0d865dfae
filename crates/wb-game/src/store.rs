//! Save stores: durable and in-memory mappings from username to record.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::GameResult;
use crate::save::SaveRecord;

/// A store mapping user identifiers to session snapshots.
///
/// `save` overwrites that user's record in full and touches no other key.
/// The store never deletes records.
pub trait SaveStore {
    /// Load the record for a user, if one exists.
    fn load(&self, user: &str) -> GameResult<Option<SaveRecord>>;

    /// Replace the record for a user.
    fn save(&mut self, user: &str, record: &SaveRecord) -> GameResult<()>;
}

/// A single shared JSON file mapping username to record.
///
/// Every save is a whole-file read-modify-write with no locking: two
/// processes writing at once race, and the last writer's full-file
/// overwrite wins. That is the store's documented contract, not a bug.
/// A missing, empty, or unparsable file reads as an empty mapping.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path. The file is created
    /// on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole mapping. Corruption is recoverable-by-ignoring: any
    /// unreadable or unparsable state yields the empty mapping.
    fn read_all(&self) -> BTreeMap<String, SaveRecord> {
        let Ok(contents) = std::fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };
        if contents.trim().is_empty() {
            return BTreeMap::new();
        }
        serde_json::from_str(&contents).unwrap_or_default()
    }
}

impl SaveStore for JsonFileStore {
    fn load(&self, user: &str) -> GameResult<Option<SaveRecord>> {
        Ok(self.read_all().remove(user))
    }

    fn save(&mut self, user: &str, record: &SaveRecord) -> GameResult<()> {
        let mut all = self.read_all();
        all.insert(user.to_string(), record.clone());
        // BTreeMap keys keep the written file deterministically ordered.
        let json = serde_json::to_string_pretty(&all)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

/// An in-memory store for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: BTreeMap<String, SaveRecord>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Seed the store with a record.
    pub fn insert(&mut self, user: impl Into<String>, record: SaveRecord) {
        self.records.insert(user.into(), record);
    }
}

impl SaveStore for MemoryStore {
    fn load(&self, user: &str) -> GameResult<Option<SaveRecord>> {
        Ok(self.records.get(user).cloned())
    }

    fn save(&mut self, user: &str, record: &SaveRecord) -> GameResult<()> {
        self.records.insert(user.to_string(), record.clone());
        Ok(())
    }
}
