//! Rebuild the store over a directory tree

use crate::config::Config;
use crate::hash::compute_digest;
use crate::store::{path_key, HashStore};
use crate::types::IntegrityError;
use crate::ui::ProgressReporter;
use std::path::{Path, PathBuf};

/// What `initialize` recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitSummary {
    /// Files hashed and stored
    pub stored: usize,
    /// Files that could not be hashed and were left out
    pub skipped: usize,
    /// Where the store was written
    pub store_path: PathBuf,
}

/// Replace the store with digests of every regular file under `directory`
///
/// The previous store content is discarded entirely, including paths outside
/// `directory`. Files that fail to hash are logged and skipped without
/// aborting the walk.
///
/// # Errors
/// * `NotADirectory` - `directory` does not exist or is not a directory; the
///   store is not touched
/// * `StoreWrite` - the new store could not be saved
pub fn initialize(
    directory: &Path,
    config: &Config,
    progress: &ProgressReporter,
) -> Result<InitSummary, IntegrityError> {
    if !directory.is_dir() {
        return Err(IntegrityError::NotADirectory {
            path: directory.to_path_buf(),
        });
    }

    let files = super::scan(directory, progress);
    let mut store = HashStore::new(config.store_path());
    let mut skipped = 0;

    progress.start_hashing(files.len() as u64);
    for file in &files {
        progress.set_current_file(file);
        match compute_digest(file) {
            Ok(digest) => {
                store.set(path_key(file), digest);
            }
            Err(e) => {
                log::warn!("{}. File skipped.", e);
                skipped += 1;
            }
        }
        progress.complete_file();
    }
    progress.finish_hashing();

    store.save()?;
    log::info!(
        "Initialized {} with {} entries from {}",
        store.path().display(),
        store.len(),
        directory.display()
    );

    Ok(InitSummary {
        stored: store.len(),
        skipped,
        store_path: store.path().to_path_buf(),
    })
}
