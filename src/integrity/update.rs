//! Re-baseline a single file

use crate::config::Config;
use crate::hash::compute_digest;
use crate::store::{path_key, HashStore};
use crate::types::{Digest, IntegrityError};
use std::path::{Path, PathBuf};

/// What `update` changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSummary {
    pub path: PathBuf,
    pub digest: Digest,
    /// Digest that was replaced, if the path was already tracked
    pub previous: Option<Digest>,
}

impl UpdateSummary {
    /// Path had no entry before this update
    pub fn newly_tracked(&self) -> bool {
        self.previous.is_none()
    }

    /// Stored digest actually changed
    pub fn changed(&self) -> bool {
        self.previous.as_ref() != Some(&self.digest)
    }
}

/// Store the current digest of one regular file, overwriting any old entry
///
/// The file is hashed before the store is loaded, so a read failure leaves
/// the store untouched.
///
/// # Errors
/// * `NotAFile` - `path` is not an existing regular file
/// * `Read` - the file could not be hashed
/// * `StoreWrite` - the store could not be saved
pub fn update(path: &Path, config: &Config) -> Result<UpdateSummary, IntegrityError> {
    if !path.is_file() {
        return Err(IntegrityError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let digest = compute_digest(path)?;

    let mut store = HashStore::load(config.store_path());
    let previous = store.set(path_key(path), digest.clone());
    store.save()?;

    log::info!("Updated {} -> {}", path.display(), digest);
    Ok(UpdateSummary {
        path: path.to_path_buf(),
        digest,
        previous,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_update_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::with_store(temp_dir.path().join("store.json"));

        let result = update(temp_dir.path(), &config);

        assert!(matches!(result, Err(IntegrityError::NotAFile { .. })));
        assert!(!config.store_path.exists());
    }

    #[test]
    fn test_update_reports_previous_digest() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.log");
        let config = Config::with_store(temp_dir.path().join("store.json"));

        fs::write(&file, b"first").unwrap();
        let first = update(&file, &config).unwrap();
        assert!(first.newly_tracked());
        assert!(first.changed());

        let again = update(&file, &config).unwrap();
        assert!(!again.newly_tracked());
        assert!(!again.changed());

        fs::write(&file, b"second").unwrap();
        let second = update(&file, &config).unwrap();
        assert_eq!(second.previous, Some(first.digest));
        assert!(second.changed());
    }

    #[test]
    fn test_update_keeps_other_entries() {
        let temp_dir = TempDir::new().unwrap();
        let a = temp_dir.path().join("a.log");
        let b = temp_dir.path().join("b.log");
        fs::write(&a, b"a").unwrap();
        fs::write(&b, b"b").unwrap();
        let config = Config::with_store(temp_dir.path().join("store.json"));

        update(&a, &config).unwrap();
        update(&b, &config).unwrap();

        let store = HashStore::load(&config.store_path);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_update_store_write_failure() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.log");
        fs::write(&file, b"a").unwrap();
        // Parent of the store path is a regular file, so saving must fail.
        let config = Config::with_store(file.join("store.json"));

        let result = update(&file, &config);
        assert!(result.unwrap_err().is_store_error());
    }
}
