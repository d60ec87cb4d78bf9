//! JSON-file-backed preference store.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::ports::PreferenceStore;

/// A stored value and when it was last written.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Entry {
    value: String,
    updated_at: DateTime<Utc>,
}

/// Persists preferences as a JSON object in a single file.
///
/// A missing file reads as an empty store. Writes create parent directories.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    /// Create a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), lock: Mutex::new(()) }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, Entry>, AppError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            AppError::Storage(format!("Failed to read {}: {e}", self.path.display()))
        })?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|e| {
            AppError::Storage(format!("Failed to parse {}: {e}", self.path.display()))
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, Entry>) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| AppError::Storage(format!("Failed to serialize store: {e}")))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, json).map_err(|e| {
            AppError::Storage(format!("Failed to write {}: {e}", self.path.display()))
        })
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let _guard = self.lock.lock().map_err(|e| AppError::Poisoned(e.to_string()))?;
        Ok(self.read_entries()?.remove(key).map(|entry| entry.value))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let _guard = self.lock.lock().map_err(|e| AppError::Poisoned(e.to_string()))?;
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), Entry { value: value.to_string(), updated_at: Utc::now() });
        self.write_entries(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        let _ = std::fs::remove_dir_all(&dir);
        dir.join("nested/storage.json")
    }

    #[test]
    fn missing_file_reads_empty() {
        let store = FileStore::new("/nonexistent/career-platform/storage.json");
        assert!(store.get("anything").unwrap().is_none());
    }

    #[test]
    fn set_then_get_persists_across_instances() {
        let path = temp_path("career_platform_file_store_test");

        FileStore::new(&path).set("career-platform-language", "ta").unwrap();
        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("career-platform-language").unwrap().as_deref(), Some("ta"));

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("updated_at"));

        let _ = std::fs::remove_dir_all(path.parent().unwrap().parent().unwrap());
    }

    #[test]
    fn set_keeps_other_keys() {
        let path = temp_path("career_platform_file_store_keys_test");
        let store = FileStore::new(&path);
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.set("a", "3").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("3"));
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));

        let _ = std::fs::remove_dir_all(path.parent().unwrap().parent().unwrap());
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = std::env::temp_dir().join("career_platform_file_store_bad_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("storage.json");
        std::fs::write(&path, "not json").unwrap();

        let err = FileStore::new(&path).get("x").unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
