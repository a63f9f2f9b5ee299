//! # SHA-2 Hashing
//!
//! SHA-256 for signature digests and checksums, SHA-512 for key schedules.

use sha2::{Digest, Sha256, Sha512};

/// SHA-256 output (256-bit).
pub type Digest256 = [u8; 32];

/// SHA-512 output (512-bit).
pub type Digest512 = [u8; 64];

/// Stateful SHA-256 hasher.
pub struct Sha256Hasher {
    inner: Sha256,
}

impl Sha256Hasher {
    /// Create new hasher.
    pub fn new() -> Self {
        Self {
            inner: Sha256::new(),
        }
    }

    /// Update with data.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Finalize and return hash.
    pub fn finalize(self) -> Digest256 {
        self.inner.finalize().into()
    }
}

impl Default for Sha256Hasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash data with SHA-256 (one-shot).
pub fn sha256(data: &[u8]) -> Digest256 {
    Sha256::digest(data).into()
}

/// Hash multiple inputs as one stream.
pub fn sha256_many(inputs: &[&[u8]]) -> Digest256 {
    let mut hasher = Sha256Hasher::new();
    for input in inputs {
        hasher.update(input);
    }
    hasher.finalize()
}

/// `sha256(sha256(data))`, the base58check checksum hash.
pub fn double_sha256(data: &[u8]) -> Digest256 {
    sha256(&sha256(data))
}

/// Hash data with SHA-512.
pub fn sha512(data: &[u8]) -> Digest512 {
    let hash = Sha512::digest(data);
    let mut out = [0u8; 64];
    out.copy_from_slice(&hash);
    out
}
