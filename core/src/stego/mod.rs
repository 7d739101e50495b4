//! Reversible blue-channel LSB embedding and extraction.

pub mod embed;
pub mod extract;
pub mod progress;
pub mod walk;

pub use embed::*;
pub use extract::*;
pub use progress::*;
pub use walk::*;

use std::fmt;

use crate::constants::{DIGEST_LEN, LEN_PREFIX_LEN};
use crate::video::{validate_sequence, Frame, FrameError};

/// Embed-side errors.
#[derive(Debug)]
pub enum EmbedError {
    EmptyMessage,
    /// Messages beyond the length-prefix limit could never be extracted.
    MessageTooLong {
        len: usize,
        max: u64,
    },
    /// The carrier cannot hold the payload plus its side-information.
    CapacityExceeded {
        required_bits: usize,
        available_pixels: usize,
    },
}

impl fmt::Display for EmbedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use EmbedError::*;
        match self {
            EmptyMessage => write!(f, "empty message: nothing to embed"),
            MessageTooLong { len, max } =>
                write!(f, "message too long: {} bytes (limit {})", len, max),
            CapacityExceeded { required_bits, available_pixels } =>
                write!(
                    f,
                    "capacity exceeded: need {} carrier bits, video has {} pixels",
                    required_bits, available_pixels
                ),
        }
    }
}

impl std::error::Error for EmbedError {}

/// Extract-side errors.
///
/// `Display` output is the user-visible text a front end shows in place
/// of the recovered message.
#[derive(Debug)]
pub enum ExtractError {
    /// Length prefix unreadable or out of range: wrong key, or the video
    /// carries no hidden message.
    InvalidLength(u64),
    /// The declared payload cannot fit the carrier.
    CapacityExceeded {
        required_bits: usize,
        available_pixels: usize,
    },
    /// Payload digest verification failed: wrong key or corrupted data.
    HashMismatch,
    Internal(String),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ExtractError::*;
        match self {
            InvalidLength(len) => write!(
                f,
                "[ERROR: Invalid message length ({}). Wrong key or no hidden message.]",
                len
            ),
            CapacityExceeded { required_bits, available_pixels } => write!(
                f,
                "[EXTRACTION ERROR: declared payload needs {} carrier bits, video has {} pixels]",
                required_bits, available_pixels
            ),
            HashMismatch => write!(f, "[ERROR: HASH MISMATCH - Wrong key or corrupted data]"),
            Internal(detail) => write!(f, "[EXTRACTION ERROR: {}]", detail),
        }
    }
}

impl std::error::Error for ExtractError {}

/// Result of a successful extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOutcome {
    pub message: String,
    /// The recovered message digest matched the embedded one.
    pub hash_valid: bool,
}

/// Carrier bits available for payload in `frames`.
///
/// Every payload bit needs a second pixel for its side-information, so
/// half the pixel count bounds the payload.
pub fn capacity_bits(frames: &[Frame]) -> Result<usize, FrameError> {
    let (width, height) = validate_sequence(frames)?;
    Ok(frames.len() * width as usize * height as usize / 2)
}

/// Largest embeddable message in bytes, after framing overhead.
pub fn max_message_len(frames: &[Frame]) -> Result<usize, FrameError> {
    Ok((capacity_bits(frames)? / 8).saturating_sub(LEN_PREFIX_LEN + DIGEST_LEN))
}
