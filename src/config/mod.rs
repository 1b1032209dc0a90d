//! Configuration management

mod cli;

pub use cli::{Cli, Command};

use crate::types::IntegrityError;
use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// File name of the store under the user's home directory
pub const DEFAULT_STORE_FILE: &str = ".log_integrity_store.json";

/// Runtime configuration shared by all operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the hash store is read from and written to
    pub store_path: PathBuf,

    /// Draw progress bars while walking directories
    pub show_progress: bool,
}

impl Config {
    /// Configuration bound to an explicit store location
    pub fn with_store(store_path: impl Into<PathBuf>) -> Self {
        Self {
            store_path: store_path.into(),
            show_progress: false,
        }
    }

    /// Store location
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }
}

/// `~/.log_integrity_store.json`
pub fn default_store_path() -> Result<PathBuf, IntegrityError> {
    let dirs = BaseDirs::new().ok_or_else(|| {
        IntegrityError::Config(
            "Could not determine home directory for the hash store; pass --store".to_string(),
        )
    })?;
    Ok(dirs.home_dir().join(DEFAULT_STORE_FILE))
}

impl TryFrom<&Cli> for Config {
    type Error = IntegrityError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        let store_path = match &cli.store {
            Some(path) => path.clone(),
            None => default_store_path()?,
        };

        if store_path.is_dir() {
            return Err(IntegrityError::Config(format!(
                "Store path {} is a directory",
                store_path.display()
            )));
        }

        Ok(Self {
            store_path,
            show_progress: !cli.quiet,
        })
    }
}
