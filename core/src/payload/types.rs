use std::fmt;

use crate::constants::{DIGEST_LEN, MAX_MESSAGE_LEN};

/// Payload framing errors.
#[derive(Debug)]
pub enum PayloadError {
    /// The length prefix is zero or above [`MAX_MESSAGE_LEN`]; the carrier
    /// holds no payload readable with this key.
    InvalidLength(u64),
    /// Buffer shorter or longer than the length prefix demands.
    LengthMismatch { have: usize, need: usize },
    /// Recomputed message digest differs from the stored one.
    HashMismatch,
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use PayloadError::*;
        match self {
            InvalidLength(len) =>
                write!(f, "invalid message length: {} (valid: 1..={})", len, MAX_MESSAGE_LEN),
            LengthMismatch { have, need } =>
                write!(f, "payload length mismatch: {} != {}", have, need),
            HashMismatch => write!(f, "message digest mismatch"),
        }
    }
}

impl std::error::Error for PayloadError {}

/// A validated payload: message bytes plus their verified digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPayload {
    pub message: Vec<u8>,
    pub digest: [u8; DIGEST_LEN],
}
