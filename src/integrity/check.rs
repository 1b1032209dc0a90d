//! Compare files against the store

use crate::config::Config;
use crate::hash::compute_digest;
use crate::store::{path_key, HashStore};
use crate::types::{Digest, DirectoryReport, FileStatus, IntegrityError};
use crate::ui::ProgressReporter;
use std::path::{Path, PathBuf};

/// Outcome of `check`, shaped by the kind of path that was checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckReport {
    /// A single regular file
    File { path: PathBuf, status: FileStatus },
    /// A directory tree
    Directory(DirectoryReport),
}

impl CheckReport {
    /// True when everything checked matched the store
    pub fn is_clean(&self) -> bool {
        match self {
            CheckReport::File { status, .. } => status.is_clean(),
            CheckReport::Directory(report) => report.is_clean(),
        }
    }
}

/// Classify a current digest against the store entry for `key`
pub fn classify(store: &HashStore, key: &str, current: &Digest) -> FileStatus {
    match store.get(key) {
        None => FileStatus::New,
        Some(stored) if stored == current => FileStatus::Unmodified,
        Some(_) => FileStatus::Modified,
    }
}

/// Check a file or a directory tree, depending on what `path` is
///
/// # Errors
/// * `NotFound` - `path` is neither a regular file nor a directory; the
///   store is not read
/// * `Read` - `path` is a file that could not be hashed
pub fn check(
    path: &Path,
    config: &Config,
    progress: &ProgressReporter,
) -> Result<CheckReport, IntegrityError> {
    if path.is_file() {
        let status = check_file(path, config)?;
        Ok(CheckReport::File {
            path: path.to_path_buf(),
            status,
        })
    } else if path.is_dir() {
        check_directory(path, config, progress).map(CheckReport::Directory)
    } else {
        Err(IntegrityError::NotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Check one regular file. Never modifies the store.
pub fn check_file(path: &Path, config: &Config) -> Result<FileStatus, IntegrityError> {
    if !path.is_file() {
        return Err(IntegrityError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let store = HashStore::load(config.store_path());
    let current = compute_digest(path)?;
    let status = classify(&store, &path_key(path), &current);

    log::debug!("{}: {:?}", path.display(), status);
    Ok(status)
}

/// Check every regular file under `directory`
///
/// The store is loaded once. Only divergences are listed; files that fail
/// to hash are recorded as unreadable and the walk continues. Tracked paths
/// that no longer exist are not reported.
pub fn check_directory(
    directory: &Path,
    config: &Config,
    progress: &ProgressReporter,
) -> Result<DirectoryReport, IntegrityError> {
    if !directory.is_dir() {
        return Err(IntegrityError::NotADirectory {
            path: directory.to_path_buf(),
        });
    }

    let store = HashStore::load(config.store_path());
    let files = super::scan(directory, progress);
    let mut report = DirectoryReport::new(directory.to_path_buf());

    progress.start_hashing(files.len() as u64);
    for file in files {
        progress.set_current_file(&file);
        match compute_digest(&file) {
            Ok(current) => {
                let status = classify(&store, &path_key(&file), &current);
                log::debug!("{}: {:?}", file.display(), status);
                report.record(file, status);
            }
            Err(e) => {
                log::warn!("{}", e);
                let reason = match &e {
                    IntegrityError::Read { source, .. } => source.to_string(),
                    other => other.to_string(),
                };
                report.record_unreadable(file, reason);
            }
        }
        progress.complete_file();
    }
    progress.finish_hashing();

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn digest(fill: char) -> Digest {
        Digest::try_from(fill.to_string().repeat(64)).unwrap()
    }

    #[test]
    fn test_classify() {
        let mut store = HashStore::new("unused.json");
        store.set("a.log", digest('a'));

        assert_eq!(classify(&store, "a.log", &digest('a')), FileStatus::Unmodified);
        assert_eq!(classify(&store, "a.log", &digest('b')), FileStatus::Modified);
        assert_eq!(classify(&store, "b.log", &digest('a')), FileStatus::New);
    }

    #[test]
    fn test_check_missing_path() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::with_store(temp_dir.path().join("store.json"));

        let result = check(
            &temp_dir.path().join("nope"),
            &config,
            &ProgressReporter::hidden(),
        );

        assert!(matches!(result, Err(IntegrityError::NotFound { .. })));
    }

    #[test]
    fn test_check_file_does_not_create_store() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.log");
        fs::write(&file, b"a").unwrap();
        let config = Config::with_store(temp_dir.path().join("state/store.json"));

        let status = check_file(&file, &config).unwrap();

        assert_eq!(status, FileStatus::New);
        assert!(!config.store_path.exists());
    }

    #[test]
    fn test_check_file_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::with_store(temp_dir.path().join("store.json"));

        let result = check_file(temp_dir.path(), &config);
        assert!(matches!(result, Err(IntegrityError::NotAFile { .. })));
    }

    #[test]
    fn test_report_is_clean() {
        let file = CheckReport::File {
            path: PathBuf::from("a.log"),
            status: FileStatus::Unmodified,
        };
        assert!(file.is_clean());

        let mut report = DirectoryReport::new(PathBuf::from("logs"));
        report.record(PathBuf::from("logs/b.log"), FileStatus::New);
        assert!(!CheckReport::Directory(report).is_clean());
    }
}
