//! JSON-file storage backend.
//!
//! Each key is stored as `<key>.json` in the data directory. Writes go
//! through a temp file followed by a rename so a crash mid-write leaves
//! the previous document intact.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::traits::KeyValueStore;
use crate::error::{Result, ScanlogError};

/// Filesystem-backed store: one JSON document per key.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir).map_err(|e| {
            ScanlogError::Storage(format!(
                "Failed to create data directory {}: {}",
                dir.display(),
                e
            ))
        })?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn document_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn read(&self, key: &str) -> Option<Value> {
        let contents = fs::read_to_string(self.document_path(key)).ok()?;
        serde_json::from_str(&contents).ok()
    }

    fn write(&mut self, key: &str, value: &Value) -> Result<()> {
        let destination = self.document_path(key);
        let temp = self.dir.join(format!(".{key}.json.tmp"));
        let contents = serde_json::to_string_pretty(value)?;
        fs::write(&temp, contents).map_err(|e| {
            ScanlogError::Storage(format!("Failed to write {}: {}", temp.display(), e))
        })?;
        replace_file(&temp, &destination)
    }
}

/// Rename with a remove-and-retry fallback for platforms where rename
/// fails when the destination exists. The temp file is cleaned up if
/// the rename ultimately fails.
fn replace_file(temp: &Path, destination: &Path) -> Result<()> {
    if let Err(initial) = fs::rename(temp, destination) {
        let _ = fs::remove_file(destination);
        if let Err(retry) = fs::rename(temp, destination) {
            let _ = fs::remove_file(temp);
            return Err(ScanlogError::Storage(format!(
                "Failed to replace {} (initial: {}, retry: {})",
                destination.display(),
                initial,
                retry
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn missing_key_reads_none() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        assert_eq!(store.read("entries"), None);
    }

    #[test]
    fn corrupt_document_reads_none() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("entries.json"), "{not json").unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        assert_eq!(store.read("entries"), None);
    }

    #[test]
    fn write_then_read() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path()).unwrap();
        let value = json!({ "a": 1 });
        store.write("settings", &value).unwrap();
        assert_eq!(store.read("settings"), Some(value));
        assert!(dir.path().join("settings.json").exists());
    }

    #[test]
    fn write_replaces_existing_document() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path()).unwrap();
        store.write("entries", &json!([1, 2, 3])).unwrap();
        store.write("entries", &json!([])).unwrap();
        assert_eq!(store.read("entries"), Some(json!([])));
        // no stray temp file left behind
        assert!(!dir.path().join(".entries.json.tmp").exists());
    }

    #[test]
    fn keys_are_independent() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path()).unwrap();
        store.write("entries", &json!([])).unwrap();
        store.write("settings", &json!({})).unwrap();
        assert_eq!(store.read("entries"), Some(json!([])));
        assert_eq!(store.read("settings"), Some(json!({})));
    }
}
