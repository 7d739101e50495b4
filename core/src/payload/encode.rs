//! Payload framing, embed direction.
//!
//! Layout:
//!
//! ```text
//! [ length (u32 LE) ]
//! [ message (L bytes) ]
//! [ sha256(message) (32 bytes) ]
//! ```

use byteorder::{LittleEndian, WriteBytesExt};
use sha2::{Digest as _, Sha256};

use crate::constants::{DIGEST_LEN, LEN_PREFIX_LEN};

/// Framed payload size in bytes for a message of `message_len` bytes.
#[inline]
pub const fn payload_len(message_len: usize) -> usize {
    LEN_PREFIX_LEN + message_len + DIGEST_LEN
}

/// Carrier bits one framed payload occupies.
#[inline]
pub const fn payload_bits(message_len: usize) -> usize {
    payload_len(message_len) * 8
}

/// Frame a message into its embeddable byte form.
pub fn build_payload(message: &[u8]) -> Vec<u8> {
    let mut payload = Vec::with_capacity(payload_len(message.len()));

    payload.write_u32::<LittleEndian>(message.len() as u32).unwrap();
    payload.extend_from_slice(message);
    payload.extend_from_slice(&Sha256::digest(message));

    debug_assert_eq!(payload.len(), payload_len(message.len()));
    payload
}
