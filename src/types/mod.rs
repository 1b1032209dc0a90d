//! Core type definitions for integrity-check

mod digest;
mod error;
mod status;

pub use digest::{Digest, InvalidDigest, DIGEST_HEX_LEN};
pub use error::IntegrityError;
pub use status::{DirectoryReport, FileStatus};
