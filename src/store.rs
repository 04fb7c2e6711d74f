//! Persistence boundary for booking and payment records.
//!
//! Records live in flat per-collection JSON documents: the whole collection
//! is read, worked on in memory, and written back. There is no row-level
//! update primitive and no transaction, so the engine assumes at most one
//! logical writer at a time.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// The two record collections the engine uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Bookings,
    Payments,
}

impl Collection {
    pub fn key(self) -> &'static str {
        match self {
            Collection::Bookings => "bookings",
            Collection::Payments => "payments",
        }
    }
}

/// Errors from the underlying key-value store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read collection '{key}': {source}")]
    Read { key: &'static str, source: io::Error },

    #[error("failed to write collection '{key}': {source}")]
    Write { key: &'static str, source: io::Error },

    #[error("collection '{key}' holds malformed records: {source}")]
    Corrupt {
        key: &'static str,
        source: serde_json::Error,
    },
}

/// Flat key-value persistence for record collections.
///
/// Stored documents are deserialized into typed records on load rather than
/// trusted blindly; a slot that no longer parses surfaces as
/// [`StoreError::Corrupt`].
pub trait RecordStore {
    /// Load every record under the given collection key. An absent
    /// collection is an empty one.
    fn load_all<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>, StoreError>;

    /// Replace the full contents of the given collection.
    fn save_all<T: Serialize>(
        &self,
        collection: Collection,
        records: &[T],
    ) -> Result<(), StoreError>;
}

/// In-memory store holding one serialized JSON document per collection.
///
/// Drop-in stand-in for the file-backed store in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RefCell<HashMap<&'static str, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn load_all<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>, StoreError> {
        let key = collection.key();
        match self.slots.borrow().get(key) {
            Some(raw) => {
                serde_json::from_str(raw).map_err(|source| StoreError::Corrupt { key, source })
            }
            None => Ok(Vec::new()),
        }
    }

    fn save_all<T: Serialize>(
        &self,
        collection: Collection,
        records: &[T],
    ) -> Result<(), StoreError> {
        let key = collection.key();
        let raw = serde_json::to_string(records)
            .map_err(|source| StoreError::Corrupt { key, source })?;
        self.slots.borrow_mut().insert(key, raw);
        Ok(())
    }
}

/// File-backed store writing one `<key>.json` document per collection under
/// a base directory.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, collection: Collection) -> PathBuf {
        self.dir.join(format!("{}.json", collection.key()))
    }
}

impl RecordStore for JsonFileStore {
    fn load_all<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>, StoreError> {
        let key = collection.key();
        let raw = match fs::read_to_string(self.path(collection)) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(StoreError::Read { key, source }),
        };
        serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt { key, source })
    }

    fn save_all<T: Serialize>(
        &self,
        collection: Collection,
        records: &[T],
    ) -> Result<(), StoreError> {
        let key = collection.key();
        let raw = serde_json::to_string(records)
            .map_err(|source| StoreError::Corrupt { key, source })?;
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Write { key, source })?;
        fs::write(self.path(collection), raw).map_err(|source| StoreError::Write { key, source })
    }
}
