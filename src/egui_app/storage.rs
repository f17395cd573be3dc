//! # Client Storage
//!
//! Durable key/value storage for the client, the desktop counterpart of
//! browser local storage. Values are strings (serialized JSON); keys are
//! plain names such as [`SESSION_KEY`].
//!
//! `FileStorage` keeps every key in one JSON object file so that a batch of
//! keys is written in a single rename. A missing or corrupt file reads as
//! empty storage.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

/// Storage key for the serialized [`Session`](crate::shared::Session)
pub const SESSION_KEY: &str = "session";

/// Storage key for the serialized [`Profile`](crate::shared::Profile)
pub const PROFILE_KEY: &str = "profile";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Durable string storage shared by the whole client.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `set` and remove `remove` in one step: all of it lands or none
    /// of it does. Missing keys in `remove` are not an error.
    fn apply(&self, set: &[(&str, String)], remove: &[&str]) -> Result<(), StorageError>;

    fn set_many(&self, entries: &[(&str, String)]) -> Result<(), StorageError> {
        self.apply(entries, &[])
    }

    fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError> {
        self.apply(&[], keys)
    }

    fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.set_many(&[(key, value)])
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.remove_many(&[key])
    }
}

/// In-process storage; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn apply(&self, set: &[(&str, String)], remove: &[&str]) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        for key in remove {
            entries.remove(*key);
        }
        for (key, value) in set {
            entries.insert((*key).to_string(), value.clone());
        }
        Ok(())
    }
}

/// JSON file storage in the platform data directory.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!("Ignoring corrupt storage file {}: {}", self.path.display(), e);
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let serialized = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, serialized).map_err(|e| self.io_error(e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(self.read_all()?.remove(key))
    }

    fn apply(&self, set: &[(&str, String)], remove: &[&str]) -> Result<(), StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.read_all()?;
        let mut changed = false;
        for key in remove {
            changed |= entries.remove(*key).is_some();
        }
        for (key, value) in set {
            entries.insert((*key).to_string(), value.clone());
            changed = true;
        }
        if !changed {
            return Ok(());
        }
        self.write_all(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_set_get_remove() {
        let storage = MemoryStorage::new();
        storage.set("a", "1".to_string()).unwrap();
        assert_eq!(storage.get("a").unwrap(), Some("1".to_string()));

        storage.remove("a").unwrap();
        storage.remove("a").unwrap();
        assert_eq!(storage.get("a").unwrap(), None);
    }

    #[test]
    fn test_file_storage_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        FileStorage::new(&path)
            .set_many(&[(SESSION_KEY, "s".to_string()), (PROFILE_KEY, "p".to_string())])
            .unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.get(SESSION_KEY).unwrap(), Some("s".to_string()));
        assert_eq!(reopened.get(PROFILE_KEY).unwrap(), Some("p".to_string()));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_file_storage_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("storage.json"));
        assert_eq!(storage.get(SESSION_KEY).unwrap(), None);
        storage.remove_many(&[SESSION_KEY, PROFILE_KEY]).unwrap();
        assert!(!storage.path().exists());
    }

    #[test]
    fn test_file_storage_corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "{not json").unwrap();

        let storage = FileStorage::new(&path);
        assert_eq!(storage.get(SESSION_KEY).unwrap(), None);

        storage.set(PROFILE_KEY, "p".to_string()).unwrap();
        assert_eq!(storage.get(PROFILE_KEY).unwrap(), Some("p".to_string()));
    }

    #[test]
    fn test_file_storage_remove_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("storage.json"));
        storage
            .set_many(&[
                (SESSION_KEY, "s".to_string()),
                (PROFILE_KEY, "p".to_string()),
                ("language", "fr".to_string()),
            ])
            .unwrap();

        storage.remove_many(&[SESSION_KEY, PROFILE_KEY]).unwrap();
        assert_eq!(storage.get(SESSION_KEY).unwrap(), None);
        assert_eq!(storage.get("language").unwrap(), Some("fr".to_string()));
    }

    #[test]
    fn test_file_storage_apply_writes_and_removes_together() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let storage = FileStorage::new(&path);
        storage
            .set_many(&[(SESSION_KEY, "old".to_string()), (PROFILE_KEY, "p".to_string())])
            .unwrap();

        storage
            .apply(&[(SESSION_KEY, "new".to_string())], &[PROFILE_KEY])
            .unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.get(SESSION_KEY).unwrap(), Some("new".to_string()));
        assert_eq!(reopened.get(PROFILE_KEY).unwrap(), None);
    }
}
