//! Reversible extraction.
//!
//! Three passes over the traversal, then restoration:
//!
//! 1. Length probe: the first 32 carrier bits, assembled into the
//!    little-endian length prefix. Out-of-range means wrong key or no
//!    hidden message.
//! 2. Reset, then the full payload region.
//! 3. The side-information region, continuing the same stream.
//!
//! Restoration replays the payload region with a fresh traversal and
//! writes the recorded original LSBs into the caller's frames. It runs on
//! the digest-mismatch path too, so a wrong-key attempt does not leave
//! the caller's frames half-modified; with a wrong key the rewritten
//! LSBs are themselves meaningless, which the caller must understand.

use std::time::Instant;

use log::debug;

use crate::constants::LEN_PREFIX_LEN;
use crate::payload::{parse_payload, payload_bits, probe_length, BitBuffer, PayloadError};
use crate::stego::progress::{ProgressGate, ProgressSink};
use crate::stego::walk::{decompose, PixelWalk};
use crate::stego::{ExtractError, ExtractOutcome};
use crate::telemetry::{StegoCounters, StegoSnapshot};
use crate::types::StegoError;
use crate::video::{validate_sequence, Frame, PixelGuard};

/// Callback receiving the user-visible extraction text: the recovered
/// message on success, the error text otherwise.
pub type MessageSink<'a> = &'a mut dyn FnMut(&str);

/// Recover the message hidden in `frames` with `key`.
///
/// Side effect: `frames` are mutated during restoration so that, on the
/// correct key, they match the pre-embedding cover at every
/// payload-carrying pixel.
pub fn extract(
    frames: &mut [Frame],
    key: &str,
    message_sink: Option<MessageSink<'_>>,
    progress: Option<&mut dyn ProgressSink>,
) -> Result<ExtractOutcome, StegoError> {
    extract_with_telemetry(frames, key, message_sink, progress).map(|(outcome, _)| outcome)
}

/// [`extract`], also returning the run's telemetry snapshot.
pub fn extract_with_telemetry(
    frames: &mut [Frame],
    key: &str,
    mut message_sink: Option<MessageSink<'_>>,
    mut progress: Option<&mut dyn ProgressSink>,
) -> Result<(ExtractOutcome, StegoSnapshot), StegoError> {
    let started = Instant::now();

    let (width, height) = validate_sequence(frames)?;
    let mut walk = PixelWalk::from_key(key)?;
    let total = frames.len() * width as usize * height as usize;

    // The probe itself needs 32 distinct pixels; any carrier that ever
    // held a payload has far more.
    if total < 2 * LEN_PREFIX_LEN * 8 {
        return Err(deliver(
            &mut message_sink,
            ExtractError::CapacityExceeded {
                required_bits: 2 * LEN_PREFIX_LEN * 8,
                available_pixels: total,
            },
        ));
    }

    // Reads come from a clone; the caller's frames are only written by
    // the final restoration pass.
    let working = frames.to_vec();

    // Pass 0: length probe.
    let mut prefix_bits = BitBuffer::with_capacity(LEN_PREFIX_LEN * 8);
    for _ in 0..LEN_PREFIX_LEN * 8 {
        let (f, y, x) = decompose(walk.next_free(total), width, height);
        prefix_bits.push(working[f].blue(x, y) & 1);
    }
    let prefix_bytes = prefix_bits.into_bytes();
    let mut prefix = [0u8; LEN_PREFIX_LEN];
    prefix.copy_from_slice(&prefix_bytes);

    let length = match probe_length(&prefix) {
        Ok(length) => length,
        Err(PayloadError::InvalidLength(len)) => {
            return Err(deliver(&mut message_sink, ExtractError::InvalidLength(len)));
        }
        Err(other) => {
            return Err(deliver(&mut message_sink, ExtractError::Internal(other.to_string())));
        }
    };

    // The probe consumed the prefix positions; replay from the start for
    // the full payload region.
    walk.reset();
    let bits = payload_bits(length);
    if 2 * bits > total {
        return Err(deliver(
            &mut message_sink,
            ExtractError::CapacityExceeded {
                required_bits: 2 * bits,
                available_pixels: total,
            },
        ));
    }

    debug!(
        "extracting {} payload bits (message length {}) from {} pixels",
        bits, length, total
    );

    let mut gate = ProgressGate::new();

    // Pass 1: payload region.
    let mut payload = BitBuffer::with_capacity(bits);
    for i in 0..bits {
        let (f, y, x) = decompose(walk.next_free(total), width, height);
        payload.push(working[f].blue(x, y) & 1);
        gate.advance(&mut progress, (i + 1) as f64 * 50.0 / bits as f64, f);
    }

    // Pass 2: side-information region, same stream, no reset.
    let mut side_info = BitBuffer::with_capacity(bits);
    for i in 0..bits {
        let (f, y, x) = decompose(walk.next_free(total), width, height);
        side_info.push(working[f].blue(x, y) & 1);
        gate.advance(&mut progress, 50.0 + (i + 1) as f64 * 50.0 / bits as f64, f);
    }

    let parsed = parse_payload(payload.as_bytes());

    // Restoration is best-effort: it runs before the digest verdict is
    // surfaced so the caller's frames never stay half-modified.
    restore(frames, key, &side_info, total, width, height)?;

    let mut counters = StegoCounters {
        frames_processed: frames.len() as u64,
        bits_payload: bits as u64,
        bits_side_info: bits as u64,
        pixel_collisions: walk.probes(),
        ..StegoCounters::default()
    };

    match parsed {
        Ok(parsed) => {
            counters.bytes_message = parsed.message.len() as u64;
            let snapshot = StegoSnapshot::from_counters(&counters, started.elapsed());
            debug!("extract done: {}", snapshot.summary());

            match String::from_utf8(parsed.message) {
                Ok(message) => {
                    if let Some(sink) = message_sink.as_mut() {
                        sink(&message);
                    }
                    Ok((ExtractOutcome { message, hash_valid: true }, snapshot))
                }
                Err(_) => Err(deliver(
                    &mut message_sink,
                    ExtractError::Internal("recovered message is not valid UTF-8".into()),
                )),
            }
        }
        Err(PayloadError::HashMismatch) => {
            Err(deliver(&mut message_sink, ExtractError::HashMismatch))
        }
        Err(other) => {
            Err(deliver(&mut message_sink, ExtractError::Internal(other.to_string())))
        }
    }
}

/// Replay the payload region with a fresh traversal and write the
/// recorded original LSBs into the caller's frames.
fn restore(
    frames: &mut [Frame],
    key: &str,
    side_info: &BitBuffer,
    total: usize,
    width: u32,
    height: u32,
) -> Result<(), StegoError> {
    let mut walk = PixelWalk::from_key(key)?;
    let mut guards: Vec<PixelGuard<'_>> = frames.iter_mut().map(PixelGuard::new).collect();

    for i in 0..side_info.len() {
        let (f, y, x) = decompose(walk.next_free(total), width, height);
        let blue = guards[f].blue(x, y);
        guards[f].set_blue(x, y, (blue & 0xFE) | side_info.get(i));
    }
    Ok(())
}

/// Push the user-visible error text to the sink, then wrap the error.
fn deliver(sink: &mut Option<MessageSink<'_>>, error: ExtractError) -> StegoError {
    if let Some(sink) = sink.as_mut() {
        sink(&error.to_string());
    }
    error.into()
}
