//! # integrity-check - Lightweight File Tamper Detection
//!
//! Hash once, verify on demand.
//!
//! Keeps a local JSON store mapping file paths to SHA-256 digests and
//! compares files against it: `init` baselines a directory tree, `check`
//! reports new and modified files, `update` re-baselines a single file.
//!
//! The store itself is plain and unauthenticated. This is a tripwire for
//! logs, not a signed integrity monitor.

// Module declarations
pub mod commands;
pub mod config;
pub mod hash;
pub mod integrity;
pub mod logging;
pub mod scanner;
pub mod store;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use config::Config;
pub use store::HashStore;
pub use types::{Digest, DirectoryReport, FileStatus, IntegrityError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
