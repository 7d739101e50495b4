//! Key digest.
//!
//! Collapses a textual key into a 32-bit signed seed: SHA-256 over the
//! UTF-8 key bytes, then the eight little-endian `u32` words of the digest
//! XORed together. The sign is an artifact of the 32-bit fold; consumers
//! take `unsigned_abs()`.

use std::fmt;

use sha2::{Digest as _, Sha256};

/// Seed derivation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedError {
    /// The key was empty or all whitespace.
    EmptyKey,
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedError::EmptyKey => write!(f, "empty key: a non-empty key is required"),
        }
    }
}

impl std::error::Error for SeedError {}

/// Derive the traversal seed from a textual key.
///
/// Two calls with the same key return the same seed; this is what makes
/// extraction replay the embedder's pixel walk.
pub fn derive_seed(key: &str) -> Result<i32, SeedError> {
    if key.trim().is_empty() {
        return Err(SeedError::EmptyKey);
    }

    let digest = Sha256::digest(key.as_bytes());

    let mut folded: u32 = 0;
    for word in digest.chunks_exact(4) {
        folded ^= u32::from_le_bytes([word[0], word[1], word[2], word[3]]);
    }

    let seed = folded as i32;
    log::trace!(
        "derived seed {:#010x} from key digest {}..",
        seed,
        hex::encode(&digest[..4])
    );
    Ok(seed)
}
