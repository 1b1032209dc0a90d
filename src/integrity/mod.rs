//! Store state transitions: initialize, check, update
//!
//! Each operation loads the store (or starts a fresh one), hashes files, and
//! for the mutating operations saves the whole store back. Nothing is locked,
//! so concurrent runs against the same store are last-writer-wins.

mod check;
mod init;
mod update;

pub use check::{check, check_directory, check_file, classify, CheckReport};
pub use init::{initialize, InitSummary};
pub use update::{update, UpdateSummary};

use crate::ui::ProgressReporter;
use std::path::{Path, PathBuf};

/// Walk a directory for regular files, driving the scan spinner
fn scan(directory: &Path, progress: &ProgressReporter) -> Vec<PathBuf> {
    progress.start_scan(directory);
    let callback = progress.scan_callback(directory);
    let files = crate::scanner::walk_files(directory, Some(&callback));
    progress.finish_scan(files.len());
    files
}
