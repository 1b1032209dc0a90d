//! Directory scanning logic

mod walker;

pub use walker::{walk_files, ProgressCallback};
