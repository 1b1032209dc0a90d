//! Progress reporting

use crate::scanner::ProgressCallback;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Progress reporter for directory walks and hashing
///
/// Bars draw to stderr, so stdout keeps only the status lines. indicatif
/// hides them on its own when stderr is not a terminal.
pub struct ProgressReporter {
    scan_bar: ProgressBar,
    hash_bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new() -> Self {
        let scan_bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            scan_bar.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "));
        }

        let hash_bar = ProgressBar::new(0);
        if let Ok(style) = ProgressStyle::with_template("{bar:30.cyan/blue} {pos}/{len} files | {msg}")
        {
            hash_bar.set_style(style.progress_chars("=>-"));
        }

        Self { scan_bar, hash_bar }
    }

    /// Reporter that never draws (quiet mode, tests)
    pub fn hidden() -> Self {
        Self {
            scan_bar: ProgressBar::hidden(),
            hash_bar: ProgressBar::hidden(),
        }
    }

    /// Mark start of a directory walk.
    pub fn start_scan(&self, root: &Path) {
        if !self.scan_bar.is_hidden() {
            self.scan_bar
                .enable_steady_tick(std::time::Duration::from_millis(120));
        }
        self.scan_bar
            .set_message(format!("Scanning {}...", root.display()));
    }

    /// Callback handed to the walker to update the spinner.
    pub fn scan_callback(&self, root: &Path) -> ProgressCallback {
        let bar = self.scan_bar.clone();
        let label = root.display().to_string();
        Box::new(move |files: u64| {
            bar.set_message(format!("Scanning {}... {} files", label, files));
        })
    }

    /// Mark completion of a directory walk.
    pub fn finish_scan(&self, files: usize) {
        self.scan_bar
            .finish_with_message(format!("Scanned {} files", files));
    }

    /// Initialize hashing phase progress.
    pub fn start_hashing(&self, total_files: u64) {
        self.hash_bar.set_length(total_files);
        self.hash_bar.set_position(0);
        self.hash_bar.set_message("Hashing...".to_string());
    }

    /// Update the current file indicator.
    pub fn set_current_file(&self, path: &Path) {
        self.hash_bar.set_message(path.display().to_string());
    }

    /// Mark one file hashed (or skipped).
    pub fn complete_file(&self) {
        self.hash_bar.inc(1);
    }

    /// Finalize hashing phase.
    pub fn finish_hashing(&self) {
        self.hash_bar.finish_and_clear();
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashing_progress_increments_position() {
        let reporter = ProgressReporter::new();
        reporter.start_hashing(2);

        reporter.complete_file();
        reporter.complete_file();

        assert_eq!(reporter.hash_bar.position(), 2);
        assert_eq!(reporter.hash_bar.length(), Some(2));
    }

    #[test]
    fn test_current_file_indicator_updates_message() {
        let reporter = ProgressReporter::new();
        reporter.set_current_file(Path::new("logs/auth.log"));

        let msg = reporter.hash_bar.message();
        assert!(msg.contains("logs/auth.log"));
    }

    #[test]
    fn test_scan_callback_updates_spinner() {
        let reporter = ProgressReporter::new();
        let callback = reporter.scan_callback(Path::new("logs"));
        callback(7);

        let msg = reporter.scan_bar.message();
        assert!(msg.contains("logs"));
        assert!(msg.contains("7 files"));
    }

    #[test]
    fn test_hidden_reporter_methods_execute_without_panicking() {
        let reporter = ProgressReporter::hidden();
        reporter.start_scan(Path::new("logs"));
        reporter.finish_scan(3);
        reporter.start_hashing(3);
        reporter.complete_file();
        reporter.finish_hashing();
    }
}
