//! Command-line interface definitions
//!
//! ```bash
//! # Baseline every file under /var/log
//! integrity-check init /var/log
//!
//! # Verify one file or a whole tree
//! integrity-check check /var/log/auth.log
//! integrity-check check /var/log
//!
//! # Accept the current content of a file as the new baseline
//! integrity-check update /var/log/auth.log
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Lightweight tamper detection for log files.
///
/// Hashes files once into a local store and reports which ones changed.
#[derive(Debug, Parser)]
#[command(name = "integrity-check")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Hash store location (default: ~/.log_integrity_store.json)
    #[arg(long, value_name = "PATH", global = true)]
    pub store: Option<PathBuf>,

    /// Increase verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress logs below error level and hide progress
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Rebuild the hash store from scratch over a directory tree
    Init {
        /// Directory to scan
        #[arg(value_name = "DIRECTORY")]
        directory: PathBuf,
    },
    /// Check a file or directory tree against the hash store
    Check {
        /// File or directory to check
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
    /// Refresh the stored hash for one file
    Update {
        /// File to update in the hash store
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}
