//! Content Hash Value Object
//!
//! SHA-256 digest of an artifact, used to verify that the deployed bytes
//! match the build output.

use std::fmt;
use std::io::{self, Read};

use sha2::{Digest, Sha256};

/// Content hash value object, rendered as `sha256:<hex>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    /// Prefix for SHA-256 hashes
    pub const PREFIX: &'static str = "sha256:";

    /// Hash an in-memory byte slice
    pub fn from_bytes(content: &[u8]) -> Self {
        Self::from_digest(Sha256::digest(content).as_slice())
    }

    /// Hash everything a reader yields, in fixed-size chunks
    pub fn from_reader(mut reader: impl Read) -> io::Result<Self> {
        let mut hasher = Sha256::new();
        let mut buf = [0u8; 64 * 1024];
        loop {
            let n = reader.read(&mut buf)?;
            if n == 0 {
                break;
            }
            hasher.update(&buf[..n]);
        }
        Ok(Self::from_digest(hasher.finalize().as_slice()))
    }

    fn from_digest(digest: &[u8]) -> Self {
        let hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
        Self(format!("{}{}", Self::PREFIX, hex))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
