//! File-backed key-value adapter
//!
//! A single JSON object on disk stands in for the browser-local store of
//! the original system. Each operation is a whole-file read-modify-write;
//! concurrent writers from other processes are last-write-wins, the same
//! shared-store policy the original lives with.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::ports::{KeyValueStore, StorageError};
use crate::storage::keys::StorageKey;

#[derive(Debug)]
pub struct FileKv {
    path: PathBuf,
}

impl FileKv {
    /// Open (or create room for) the backing file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::Unavailable(e.to_string()))?;
        }
        Ok(Self { path })
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(StorageError::Unavailable(e.to_string())),
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let raw = serde_json::to_string(entries)?;
        fs::write(&self.path, raw).map_err(|e| StorageError::Unavailable(e.to_string()))?;
        debug!(path = %self.path.display(), entries = entries.len(), "persisted store file");
        Ok(())
    }
}

impl KeyValueStore for FileKv {
    fn get(&self, key: &StorageKey) -> Result<Option<String>, StorageError> {
        Ok(self.read_entries()?.get(key.as_str()).cloned())
    }

    fn set(&self, key: &StorageKey, value: &str) -> Result<(), StorageError> {
        let mut entries = self.read_entries()?;
        entries.insert(key.as_str().to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &StorageKey) -> Result<(), StorageError> {
        let mut entries = self.read_entries()?;
        if entries.remove(key.as_str()).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::keys::StoreName;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileKv::open(dir.path().join("store.json")).unwrap();
        let key = StorageKey::global(StoreName::Cart);
        kv.set(&key, r#"[{"id":"1"}]"#).unwrap();

        // A second handle over the same file sees the write.
        let reopened = FileKv::open(dir.path().join("store.json")).unwrap();
        assert_eq!(reopened.get(&key).unwrap().as_deref(), Some(r#"[{"id":"1"}]"#));

        reopened.remove(&key).unwrap();
        assert_eq!(kv.get(&key).unwrap(), None);
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileKv::open(dir.path().join("nested/store.json")).unwrap();
        let key = StorageKey::global(StoreName::Cart);
        assert_eq!(kv.get(&key).unwrap(), None);
    }
}
