//! File-backed slot store.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{Storage, StorageError};

/// Slot store persisted to a single JSON file.
///
/// The whole slot map is rewritten on every mutation, mirroring the
/// full-overwrite semantics of a browser's local storage. Unlike the original
/// storefront, write failures surface as errors instead of aborting the
/// process.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    slots: Mutex<HashMap<String, String>>,
}

impl FileStorage {
    /// Open a file-backed store, loading existing slots if the file exists.
    ///
    /// The parent directory is created if missing.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the file cannot be read or the parent
    /// directory cannot be created, and `StorageError::Corrupt` if the file
    /// exists but does not hold a valid slot map.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let slots = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
                slot: path.display().to_string(),
                source,
            })?
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            slots: Mutex::new(slots),
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, slots: &HashMap<String, String>) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(slots).map_err(StorageError::Serialize)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slots = self.slots.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        slots.insert(key.to_owned(), value.to_owned());
        self.flush(&slots)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        slots.remove(key);
        self.flush(&slots)
    }
}
