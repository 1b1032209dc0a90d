//! Human-readable status lines

use crate::integrity::{CheckReport, InitSummary, UpdateSummary};
use crate::types::{DirectoryReport, FileStatus};
use std::path::PathBuf;

pub fn format_init_summary(summary: &InitSummary) -> String {
    let mut text = format!(
        "Hashes stored successfully for {} files.",
        summary.stored
    );
    if summary.skipped > 0 {
        text.push_str(&format!(
            "\nSkipped {} unreadable files.",
            summary.skipped
        ));
    }
    text
}

pub fn format_file_status(status: FileStatus) -> &'static str {
    match status {
        FileStatus::Unmodified => "Status: Unmodified",
        FileStatus::Modified => "Status: Modified (Hash mismatch)",
        FileStatus::New => "Status: New file (not in hash store)",
    }
}

/// Modified block first, then new, then unreadable
pub fn format_directory_report(report: &DirectoryReport) -> String {
    if report.is_clean() {
        return "All files unmodified.".to_string();
    }

    let mut blocks = Vec::new();
    if !report.modified.is_empty() {
        blocks.push(format_path_block("Modified files:", &report.modified));
    }
    if !report.new.is_empty() {
        blocks.push(format_path_block(
            "New files (not in hash store):",
            &report.new,
        ));
    }
    if !report.unreadable.is_empty() {
        let mut lines = vec!["Unreadable files:".to_string()];
        for (path, reason) in &report.unreadable {
            lines.push(format!("- {} ({})", path.display(), reason));
        }
        blocks.push(lines.join("\n"));
    }

    blocks.join("\n\n")
}

pub fn format_check_report(report: &CheckReport) -> String {
    match report {
        CheckReport::File { status, .. } => format_file_status(*status).to_string(),
        CheckReport::Directory(report) => format_directory_report(report),
    }
}

pub fn format_update_summary(summary: &UpdateSummary) -> String {
    "Hash updated successfully.".to_string()
        + if summary.newly_tracked() {
            " (now tracked)"
        } else if summary.changed() {
            " (baseline replaced)"
        } else {
            ""
        }
}

fn format_path_block(header: &str, paths: &[PathBuf]) -> String {
    let mut lines = Vec::with_capacity(paths.len() + 1);
    lines.push(header.to_string());
    for path in paths {
        lines.push(format!("- {}", path.display()));
    }
    lines.join("\n")
}
