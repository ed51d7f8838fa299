//! Content Hash Value Object
//!
//! A validated, immutable SHA-256 digest of a file's content.
//! Used to check governed assets against their lock entries.

use std::fmt;
use std::io::{self, Read};

use sha2::{Digest, Sha256};

/// Read size used when streaming a file through the hasher.
pub const HASH_CHUNK_SIZE: usize = 64 * 1024;

/// Content hash value object
///
/// Always holds the lowercase hex form without any prefix, which is the
/// format lock documents record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    /// Optional prefix accepted on recorded hashes
    pub const PREFIX: &'static str = "sha256:";

    /// Create a ContentHash from a recorded hash string (with or without prefix)
    pub fn new(raw_hash: &str) -> Self {
        let hex = raw_hash.strip_prefix(Self::PREFIX).unwrap_or(raw_hash);
        Self(hex.trim().to_ascii_lowercase())
    }

    /// Compute SHA-256 of an in-memory buffer
    pub fn from_bytes(content: &[u8]) -> Self {
        Self(format!("{:x}", Sha256::digest(content)))
    }

    /// Compute SHA-256 of a stream, reading it in `HASH_CHUNK_SIZE` chunks.
    pub fn from_reader<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut hasher = Sha256::new();
        let mut buf = vec![0u8; HASH_CHUNK_SIZE];
        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            hasher.update(&buf[..n]);
        }
        Ok(Self(format!("{:x}", hasher.finalize())))
    }

    /// Get the hex digest
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this hash matches a recorded value.
    ///
    /// Comparison is case-insensitive and ignores an optional `sha256:` prefix.
    pub fn matches_str(&self, recorded: &str) -> bool {
        let recorded = recorded.strip_prefix(Self::PREFIX).unwrap_or(recorded);
        self.0.eq_ignore_ascii_case(recorded.trim())
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContentHash {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
