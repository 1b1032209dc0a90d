//! Digest - hex fingerprint of a file's content

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of hex characters in a SHA-256 digest
pub const DIGEST_HEX_LEN: usize = 64;

/// Lowercase hexadecimal SHA-256 digest of a file's bytes
///
/// Deserialization validates the string, so a store holding anything other
/// than 64 lowercase hex characters fails to parse as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Digest(String);

impl Digest {
    /// Build a digest from raw hash output
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let hex = bytes.iter().map(|b| format!("{:02x}", b)).collect();
        Self(hex)
    }

    /// Hex form of the digest
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Returned when a string is not a well-formed digest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDigest(pub String);

impl fmt::Display for InvalidDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid digest {:?}: expected {} lowercase hex characters",
            self.0, DIGEST_HEX_LEN
        )
    }
}

impl std::error::Error for InvalidDigest {}

impl TryFrom<String> for Digest {
    type Error = InvalidDigest;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let well_formed = value.len() == DIGEST_HEX_LEN
            && value
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));

        if well_formed {
            Ok(Self(value))
        } else {
            Err(InvalidDigest(value))
        }
    }
}

impl From<Digest> for String {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
