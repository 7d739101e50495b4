//! Reversible embedding.
//!
//! Two phases ride one key-seeded traversal:
//!
//! ```text
//! walk step 0 .. B-1    payload bits, MSB first within each payload byte;
//!                       the displaced blue LSBs are recorded as
//!                       side-information
//! walk step B .. 2B-1   side-information bits
//! ```
//!
//! Extraction replays the same traversal, which is why the stream must
//! not be reset between the phases.

use std::time::Instant;

use log::debug;

use crate::constants::MAX_MESSAGE_LEN;
use crate::payload::{bit_at, build_payload, BitBuffer};
use crate::stego::progress::{ProgressGate, ProgressSink};
use crate::stego::walk::{decompose, PixelWalk};
use crate::stego::EmbedError;
use crate::telemetry::{StegoCounters, StegoSnapshot};
use crate::types::StegoError;
use crate::video::{validate_sequence, Frame, PixelGuard};

/// Hide `message` in a clone of `frames`, keyed by `key`.
///
/// The caller's frames are untouched; the returned clones differ from
/// them only in blue-channel LSBs.
pub fn embed(
    frames: &[Frame],
    message: &str,
    key: &str,
    progress: Option<&mut dyn ProgressSink>,
) -> Result<Vec<Frame>, StegoError> {
    embed_with_telemetry(frames, message, key, progress).map(|(stego, _)| stego)
}

/// [`embed`], also returning the run's telemetry snapshot.
pub fn embed_with_telemetry(
    frames: &[Frame],
    message: &str,
    key: &str,
    mut progress: Option<&mut dyn ProgressSink>,
) -> Result<(Vec<Frame>, StegoSnapshot), StegoError> {
    let started = Instant::now();

    // Validation precedes every mutation.
    let (width, height) = validate_sequence(frames)?;
    if message.is_empty() {
        return Err(EmbedError::EmptyMessage.into());
    }
    if message.len() as u64 > MAX_MESSAGE_LEN {
        return Err(EmbedError::MessageTooLong {
            len: message.len(),
            max: MAX_MESSAGE_LEN,
        }
        .into());
    }
    let mut walk = PixelWalk::from_key(key)?;

    let payload = build_payload(message.as_bytes());
    let bits = payload.len() * 8;
    let total = frames.len() * width as usize * height as usize;
    if 2 * bits > total {
        return Err(EmbedError::CapacityExceeded {
            required_bits: 2 * bits,
            available_pixels: total,
        }
        .into());
    }

    debug!(
        "embedding {} payload bits into {} pixels across {} frames",
        bits,
        total,
        frames.len()
    );

    let mut counters = StegoCounters {
        frames_processed: frames.len() as u64,
        bytes_message: message.len() as u64,
        ..StegoCounters::default()
    };

    let mut stego = frames.to_vec();
    let mut side_info = BitBuffer::with_capacity(bits);
    let mut gate = ProgressGate::new();

    {
        let mut guards: Vec<PixelGuard<'_>> = stego.iter_mut().map(PixelGuard::new).collect();

        // Phase A: payload bits, recording displaced LSBs.
        for i in 0..bits {
            let (f, y, x) = decompose(walk.next_free(total), width, height);
            let blue = guards[f].blue(x, y);
            side_info.push(blue & 1);
            guards[f].set_blue(x, y, (blue & 0xFE) | bit_at(&payload, i));
            gate.advance(&mut progress, (i + 1) as f64 * 50.0 / bits as f64, f);
        }
        counters.bits_payload = bits as u64;

        // Phase B: side-information, same stream, no reset.
        for i in 0..bits {
            let (f, y, x) = decompose(walk.next_free(total), width, height);
            let blue = guards[f].blue(x, y);
            guards[f].set_blue(x, y, (blue & 0xFE) | side_info.get(i));
            gate.advance(&mut progress, 50.0 + (i + 1) as f64 * 50.0 / bits as f64, f);
        }
        counters.bits_side_info = bits as u64;
    } // guards drop here, committing journaled writes

    counters.pixel_collisions = walk.probes();

    let snapshot = StegoSnapshot::from_counters(&counters, started.elapsed());
    debug!("embed done: {}", snapshot.summary());

    Ok((stego, snapshot))
}
