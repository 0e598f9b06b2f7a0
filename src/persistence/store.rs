use super::files::{atomic_write, read_file, remove_file};
use anyhow::Result;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the store itself, as opposed to I/O failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid storage key {0:?}: only ASCII letters, digits, '-' and '_' are allowed")]
    InvalidKey(String),
}

/// String-keyed, string-valued storage with whole-value writes
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

fn check_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

/// Store keeping one file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        check_key(key)?;
        Ok(self.dir.join(key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        read_file(self.path_for(key)?)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        atomic_write(self.path_for(key)?, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        remove_file(self.path_for(key)?)
    }
}

#[cfg(test)]
pub use memory::MemoryStore;


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_store_set_get_remove() {
        let temp_dir = tempdir().unwrap();
        let mut store = FileStore::new(temp_dir.path());

        assert_eq!(store.get("donein3").unwrap(), None);

        store.set("donein3", "{\"streak\":1}").unwrap();
        assert_eq!(store.get("donein3").unwrap().as_deref(), Some("{\"streak\":1}"));
        assert!(temp_dir.path().join("donein3").exists());

        store.remove("donein3").unwrap();
        assert_eq!(store.get("donein3").unwrap(), None);
    }

    #[test]
    fn test_file_store_keys_are_independent() {
        let temp_dir = tempdir().unwrap();
        let mut store = FileStore::new(temp_dir.path());

        store.set("donein3", "state").unwrap();
        store.set("darkMode", "true").unwrap();
        store.remove("donein3").unwrap();

        assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_file_store_rejects_bad_keys() {
        let temp_dir = tempdir().unwrap();
        let mut store = FileStore::new(temp_dir.path());

        for key in ["", "../escape", "a/b", "with space"] {
            let err = store.set(key, "x").unwrap_err();
            assert!(err.downcast_ref::<StoreError>().is_some(), "key {:?}", key);
        }
    }

    #[test]
    fn test_memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let mut handle = store.clone();
        handle.set("darkMode", "true").unwrap();

        assert_eq!(store.raw("darkMode").as_deref(), Some("true"));
        assert_eq!(store.len(), 1);
    }
}
