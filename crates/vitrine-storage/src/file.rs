//! File-backed store, one file per key under a root directory.

use crate::error::StorageError;
use crate::store::KeyValueStore;
use std::fs;
use std::path::{Path, PathBuf};

/// Key-value store writing each key to `<root>/<key>.json`.
///
/// Keys are expected to be simple names (no path separators); anything
/// that would escape the root directory is rejected.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The directory this store writes under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        if key.is_empty() || key.contains(['/', '\\']) || key.contains("..") {
            return Err(StorageError::Backend(format!("invalid storage key: {key:?}")));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)?;
        tracing::debug!(key, len = raw.len(), "loaded value from file store");
        Ok(Some(raw))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::write(&path, value)?;
        tracing::debug!(key, len = value.len(), "wrote value to file store");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_absent_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();
        assert!(store.get("missing").unwrap().is_none());
    }

    #[test]
    fn test_set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        store.set("cart", r#"[{"id":"x"}]"#).unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some(r#"[{"id":"x"}]"#));
        assert!(dir.path().join("cart.json").exists());
    }

    #[test]
    fn test_value_survives_a_new_store_over_the_same_root() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = FileStore::new(dir.path()).unwrap();
            store.set("cart", "persisted").unwrap();
        }
        let reopened = FileStore::new(dir.path()).unwrap();
        assert_eq!(reopened.get("cart").unwrap().as_deref(), Some("persisted"));
    }

    #[test]
    fn test_path_traversal_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        assert!(store.set("../escape", "v").is_err());
        assert!(store.get("a/b").is_err());
    }
}
