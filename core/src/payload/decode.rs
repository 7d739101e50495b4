//! Payload framing, extract direction.
//!
//! The length prefix is probed first so a wrong key can be rejected after
//! reading only 32 carrier bits; the full parse then re-validates the
//! prefix and verifies the message digest byte-for-byte.

use byteorder::{ByteOrder, LittleEndian};
use sha2::{Digest as _, Sha256};

use crate::constants::{DIGEST_LEN, LEN_PREFIX_LEN, MAX_MESSAGE_LEN};
use crate::payload::encode::payload_len;
use crate::payload::types::{ParsedPayload, PayloadError};

/// Validate a length prefix.
///
/// Returns the message length, or [`PayloadError::InvalidLength`] when the
/// prefix is zero or above [`MAX_MESSAGE_LEN`].
pub fn probe_length(prefix: &[u8; LEN_PREFIX_LEN]) -> Result<usize, PayloadError> {
    let len = u64::from(LittleEndian::read_u32(prefix));
    if len == 0 || len > MAX_MESSAGE_LEN {
        return Err(PayloadError::InvalidLength(len));
    }
    Ok(len as usize)
}

/// Parse and validate a full payload buffer.
pub fn parse_payload(payload: &[u8]) -> Result<ParsedPayload, PayloadError> {
    if payload.len() < LEN_PREFIX_LEN + DIGEST_LEN {
        return Err(PayloadError::LengthMismatch {
            have: payload.len(),
            need: LEN_PREFIX_LEN + DIGEST_LEN,
        });
    }

    let mut prefix = [0u8; LEN_PREFIX_LEN];
    prefix.copy_from_slice(&payload[..LEN_PREFIX_LEN]);
    let len = probe_length(&prefix)?;

    let need = payload_len(len);
    if payload.len() != need {
        return Err(PayloadError::LengthMismatch { have: payload.len(), need });
    }

    let message = &payload[LEN_PREFIX_LEN..LEN_PREFIX_LEN + len];
    let stored = &payload[LEN_PREFIX_LEN + len..];

    let actual = Sha256::digest(message);
    if actual.as_slice() != stored {
        return Err(PayloadError::HashMismatch);
    }

    let mut digest = [0u8; DIGEST_LEN];
    digest.copy_from_slice(stored);
    Ok(ParsedPayload { message: message.to_vec(), digest })
}
