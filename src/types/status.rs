//! Verification outcomes for files and directory trees

use std::path::PathBuf;

/// Result of comparing a file's current digest with the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// Path has no entry in the store
    New,
    /// Current digest equals the stored digest
    Unmodified,
    /// Stored digest differs from the current one
    Modified,
}

impl FileStatus {
    /// Only an unmodified file counts as verified
    pub fn is_clean(&self) -> bool {
        matches!(self, FileStatus::Unmodified)
    }
}

/// Divergences found while checking a directory tree
///
/// Files matching the store are only counted. Tracked paths missing from
/// the filesystem are not reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryReport {
    /// Directory that was walked, as given
    pub root: PathBuf,

    /// Files whose digest differs from the store
    pub modified: Vec<PathBuf>,

    /// Files absent from the store
    pub new: Vec<PathBuf>,

    /// Files that could not be hashed, with the reason
    pub unreadable: Vec<(PathBuf, String)>,

    /// Number of files matching the store
    pub unmodified: usize,
}

impl DirectoryReport {
    /// Create an empty report for a directory
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            ..Self::default()
        }
    }

    /// Record a classified file
    pub fn record(&mut self, path: PathBuf, status: FileStatus) {
        match status {
            FileStatus::New => self.new.push(path),
            FileStatus::Modified => self.modified.push(path),
            FileStatus::Unmodified => self.unmodified += 1,
        }
    }

    /// Record a file that failed to hash
    pub fn record_unreadable(&mut self, path: PathBuf, reason: String) {
        self.unreadable.push((path, reason));
    }

    /// True when every walked file matched the store
    pub fn is_clean(&self) -> bool {
        self.modified.is_empty() && self.new.is_empty() && self.unreadable.is_empty()
    }

    /// Total number of files visited
    pub fn total_files(&self) -> usize {
        self.unmodified + self.modified.len() + self.new.len() + self.unreadable.len()
    }
}
