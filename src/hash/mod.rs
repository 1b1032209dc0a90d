//! Hashing utilities

use crate::types::{Digest, IntegrityError};
use sha2::{Digest as _, Sha256};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Read buffer size for streaming files through the hasher
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Compute the SHA-256 digest of a file
///
/// The file is streamed in 64KB chunks so large logs are never held in
/// memory.
///
/// # Arguments
/// * `file_path` - Path to the file to hash
///
/// # Returns
/// * `Ok(Digest)` - 64-character lowercase hex digest
/// * `Err(IntegrityError::Read)` - the file could not be opened or read
///
/// # Example
/// ```no_run
/// use integrity_check::hash::compute_digest;
/// use std::path::Path;
///
/// let digest = compute_digest(Path::new("/var/log/syslog"))?;
/// println!("{}", digest);
/// # Ok::<(), integrity_check::types::IntegrityError>(())
/// ```
pub fn compute_digest(file_path: &Path) -> Result<Digest, IntegrityError> {
    let read_error = |source: std::io::Error| IntegrityError::Read {
        path: file_path.to_path_buf(),
        source,
    };

    let mut file = File::open(file_path).map_err(read_error)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];

    loop {
        let bytes_read = match file.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(read_error(e)),
        };

        hasher.update(&buffer[..bytes_read]);
    }

    let digest = Digest::from_bytes(&hasher.finalize());
    log::trace!("{} -> {}", file_path.display(), digest);
    Ok(digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_hash_empty_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"").unwrap();
        temp_file.flush().unwrap();

        let digest = compute_digest(temp_file.path()).unwrap();
        assert_eq!(
            digest.as_str(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_hash_known_value() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"abc").unwrap();
        temp_file.flush().unwrap();

        let digest = compute_digest(temp_file.path()).unwrap();
        assert_eq!(
            digest.as_str(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_hash_deterministic() {
        let content = b"Test content for hashing";

        let mut file1 = NamedTempFile::new().unwrap();
        file1.write_all(content).unwrap();
        file1.flush().unwrap();

        let mut file2 = NamedTempFile::new().unwrap();
        file2.write_all(content).unwrap();
        file2.flush().unwrap();

        let digest1 = compute_digest(file1.path()).unwrap();
        let digest2 = compute_digest(file2.path()).unwrap();

        assert_eq!(digest1, digest2);
    }

    #[test]
    fn test_hash_nonexistent_file() {
        let path = Path::new("/nonexistent/file.txt");
        let result = compute_digest(path);

        assert!(matches!(result, Err(IntegrityError::Read { .. })));
    }

    #[test]
    fn test_hash_directory_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = compute_digest(dir.path());

        assert!(result.unwrap_err().is_read_error());
    }
}
