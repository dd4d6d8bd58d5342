//! Persistence of submitted records.
//!
//! Records are kept as a JSON array under one key of a string key-value
//! store. Each append reads the whole list, pushes and writes it back.

use crate::error::{StoreError, StoreErrorKind};
use crate::types::SubmissionRecord;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Extension point for the host's key-value storage.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Volatile store, lost with the session.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a single JSON object file mapping keys to string values.
///
/// The whole file is rewritten on every `set_item`. A missing file is an
/// empty store.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self, key: &str) -> Result<Map<String, Value>, StoreError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(io_error(key, &self.path, e)),
        };
        if text.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str(&text) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(StoreError {
                kind: StoreErrorKind::Corrupt,
                key: key.to_string(),
                message: format!("{} does not hold a JSON object", self.path.display()),
            }),
            Err(e) => Err(StoreError {
                kind: StoreErrorKind::Corrupt,
                key: key.to_string(),
                message: format!("{}: {}", self.path.display(), e),
            }),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let map = self.read_map(key)?;
        match map.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(StoreError {
                kind: StoreErrorKind::Corrupt,
                key: key.to_string(),
                message: "stored value is not a string".to_string(),
            }),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = self.read_map(key)?;
        map.insert(key.to_string(), Value::String(value.to_string()));
        let text = serde_json::to_string_pretty(&map).map_err(|e| StoreError {
            kind: StoreErrorKind::Encode,
            key: key.to_string(),
            message: e.to_string(),
        })?;
        std::fs::write(&self.path, text).map_err(|e| io_error(key, &self.path, e))
    }
}

fn io_error(key: &str, path: &Path, e: std::io::Error) -> StoreError {
    StoreError {
        kind: StoreErrorKind::Io,
        key: key.to_string(),
        message: format!("{}: {}", path.display(), e),
    }
}

/// Append-only list of submission records kept under one namespace.
#[derive(Clone, Debug)]
pub struct RecordStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> RecordStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        RecordStore {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Every record persisted so far, oldest first. An absent key is an empty list.
    pub fn load(&self) -> Result<Vec<SubmissionRecord>, StoreError> {
        let Some(text) = self.store.get_item(&self.key)? else {
            return Ok(Vec::new());
        };
        // A stored JSON `null` reads as an empty list.
        let records: Option<Vec<SubmissionRecord>> =
            serde_json::from_str(&text).map_err(|e| StoreError {
                kind: StoreErrorKind::Corrupt,
                key: self.key.clone(),
                message: e.to_string(),
            })?;
        Ok(records.unwrap_or_default())
    }

    /// Read the list, append `record`, write the list back.
    ///
    /// Returns the number of records now stored.
    pub fn append(&mut self, record: &SubmissionRecord) -> Result<usize, StoreError> {
        let mut records = self.load()?;
        records.push(record.clone());

        let text = serde_json::to_string(&records).map_err(|e| StoreError {
            kind: StoreErrorKind::Encode,
            key: self.key.clone(),
            message: e.to_string(),
        })?;
        self.store.set_item(&self.key, &text)?;

        tracing::info!(key = %self.key, count = records.len(), "record appended");
        Ok(records.len())
    }
}
