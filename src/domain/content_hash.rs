//! Content digest used to bucket notes during deduplication.

use sha2::{Digest, Sha256};
use std::fmt;

/// SHA256 hash of note content.
///
/// Stores a 64-character lowercase hex string. Computed from the raw
/// content bytes, so any byte difference (including trailing whitespace or
/// line endings) yields a different hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash {
    hex: String,
}

impl ContentHash {
    /// Computes a SHA256 hash of the given bytes.
    pub fn compute(bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        let result = hasher.finalize();
        let hex = format!("{:x}", result);
        Self { hex }
    }

    /// Returns the hash as a 64-character lowercase hex string.
    pub fn as_str(&self) -> &str {
        &self.hex
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex)
    }
}
