//! Sequential directory walker

use std::path::{Path, PathBuf};

/// Callback for reporting walk progress
///
/// Arguments:
/// - `files_seen`: Number of regular files yielded so far
pub type ProgressCallback = Box<dyn Fn(u64) + Send + Sync>;

/// Collect every regular file under `root`
///
/// Walks the directory tree recursively with all of the `ignore` crate's
/// filters turned off: hidden files, `.gitignore` and `.ignore` rules are not
/// applied. Symlinks are not followed and are not yielded.
///
/// Paths are `root` joined with each entry's relative path, so they keep the
/// form the caller used for `root`. Entries come back sorted by file name
/// within each directory.
///
/// # Errors
/// Traversal errors (unreadable subdirectories, entries vanishing mid-walk)
/// are logged and skipped; the walk never fails as a whole.
pub fn walk_files(root: &Path, on_progress: Option<&ProgressCallback>) -> Vec<PathBuf> {
    let walker = ignore::WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut files = Vec::new();

    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Error during directory traversal: {}. Walk continues.", e);
                continue;
            }
        };

        let is_file = entry.file_type().map(|ft| ft.is_file()).unwrap_or(false);
        if !is_file {
            continue;
        }

        files.push(entry.into_path());

        if let Some(callback) = on_progress {
            callback(files.len() as u64);
        }
    }

    log::debug!("Found {} files under {}", files.len(), root.display());
    files
}
