//! Persisted path -> digest mapping
//!
//! The store is a single JSON object on disk, loaded in full at the start of
//! an operation and rewritten in full on save. There is no locking: two
//! processes saving the same store race, and the last writer wins.

use crate::types::{Digest, IntegrityError};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Store key for a path: its string form exactly as given, never canonicalized
pub fn path_key(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// In-memory copy of the hash store, bound to its backing file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashStore {
    path: PathBuf,
    entries: BTreeMap<String, Digest>,
}

impl HashStore {
    /// Create an empty store that will be written to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Load the store from `path`
    ///
    /// A missing, unreadable, or malformed file yields an empty store. This
    /// keeps the first run and `init` over a damaged store working.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let mut store = Self::new(path);

        let content = match fs::read_to_string(&store.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No hash store at {}, starting empty", store.path.display());
                return store;
            }
            Err(e) => {
                log::warn!(
                    "Hash store {} is unreadable ({}), treating it as empty",
                    store.path.display(),
                    e
                );
                return store;
            }
        };

        match serde_json::from_str::<BTreeMap<String, Digest>>(&content) {
            Ok(entries) => {
                log::debug!(
                    "Loaded {} entries from {}",
                    entries.len(),
                    store.path.display()
                );
                store.entries = entries;
            }
            Err(e) => {
                log::warn!(
                    "Hash store {} is malformed ({}), treating it as empty",
                    store.path.display(),
                    e
                );
            }
        }

        store
    }

    /// Write the full mapping to the backing file, replacing its content
    ///
    /// Parent directories are created on first save. Not atomic: an
    /// interrupted write can leave a truncated store behind.
    pub fn save(&self) -> Result<(), IntegrityError> {
        let write_error = |source: std::io::Error| IntegrityError::StoreWrite {
            path: self.path.clone(),
            source,
        };

        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| write_error(e.into()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_error)?;
            }
        }

        fs::write(&self.path, json).map_err(write_error)?;
        log::debug!(
            "Saved {} entries to {}",
            self.entries.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Stored digest for a path key
    pub fn get(&self, key: &str) -> Option<&Digest> {
        self.entries.get(key)
    }

    /// Insert or overwrite the digest for a path key, returning the old one
    pub fn set(&mut self, key: impl Into<String>, digest: Digest) -> Option<Digest> {
        self.entries.insert(key.into(), digest)
    }

    /// Check if a path key is tracked
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of tracked paths
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is tracked
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Backing file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Iterate tracked paths and digests in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Digest)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn digest(fill: char) -> Digest {
        Digest::try_from(fill.to_string().repeat(64)).unwrap()
    }

    #[test]
    fn test_load_missing_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = HashStore::load(temp_dir.path().join("store.json"));

        assert!(store.is_empty());
        assert_eq!(store.path(), temp_dir.path().join("store.json"));
    }

    #[test]
    fn test_get_set() {
        let mut store = HashStore::new("unused.json");
        assert!(store.get("a.log").is_none());

        assert!(store.set("a.log", digest('a')).is_none());
        assert_eq!(store.get("a.log"), Some(&digest('a')));

        let previous = store.set("a.log", digest('b'));
        assert_eq!(previous, Some(digest('a')));
        assert_eq!(store.get("a.log"), Some(&digest('b')));
        assert_eq!(store.len(), 1);
        assert!(store.contains("a.log"));
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/store.json");

        let mut store = HashStore::new(&path);
        store.set("x.log", digest('c'));
        store.save().unwrap();

        let reloaded = HashStore::load(&path);
        assert_eq!(reloaded, store);
    }

    #[test]
    fn test_save_to_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let store = HashStore::new(temp_dir.path());

        let result = store.save();
        assert!(result.unwrap_err().is_store_error());
    }

    #[test]
    fn test_path_key_keeps_path_as_given() {
        assert_eq!(path_key(Path::new("logs/../logs/a.log")), "logs/../logs/a.log");
        assert_eq!(path_key(&Path::new("logs").join("a.log")), "logs/a.log");
    }
}
