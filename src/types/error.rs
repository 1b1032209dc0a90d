//! Error types for integrity-check

use std::path::PathBuf;
use thiserror::Error;

/// Error types for integrity-check operations
#[derive(Debug, Error)]
pub enum IntegrityError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Command expected a directory
    #[error("{} is not a valid directory", path.display())]
    NotADirectory { path: PathBuf },

    /// Command expected a regular file
    #[error("{} is not a valid file", path.display())]
    NotAFile { path: PathBuf },

    /// Path is neither a regular file nor a directory
    #[error("{} is not a valid file or directory", path.display())]
    NotFound { path: PathBuf },

    /// A file could not be opened or read for hashing
    #[error("Error reading file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The hash store could not be persisted
    #[error("Error saving hash store {}: {source}", path.display())]
    StoreWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IntegrityError {
    /// Check if this error means the user pointed the command at the wrong kind of path
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            IntegrityError::NotADirectory { .. }
                | IntegrityError::NotAFile { .. }
                | IntegrityError::NotFound { .. }
        )
    }

    /// Check if this error came from hashing a file
    pub fn is_read_error(&self) -> bool {
        matches!(self, IntegrityError::Read { .. })
    }

    /// Check if this error came from persisting the store
    pub fn is_store_error(&self) -> bool {
        matches!(self, IntegrityError::StoreWrite { .. })
    }
}
