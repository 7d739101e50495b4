//! Mutable counters collected during an embed or extract run.
//!
//! Converted into an immutable [`StegoSnapshot`] when the run ends.
//!
//! [`StegoSnapshot`]: crate::telemetry::StegoSnapshot

use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

/// Deterministic counters collected while the traversal runs.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StegoCounters {
    pub frames_processed: u64,
    pub bytes_message: u64,
    pub bits_payload: u64,
    pub bits_side_info: u64,
    /// Draws that landed on an already-visited pixel and advanced to the
    /// next free one.
    pub pixel_collisions: u64,
}

impl StegoCounters {
    pub fn merge(&mut self, other: &StegoCounters) {
        self.frames_processed += other.frames_processed;
        self.bytes_message += other.bytes_message;
        self.bits_payload += other.bits_payload;
        self.bits_side_info += other.bits_side_info;
        self.pixel_collisions += other.pixel_collisions;
    }
}

impl AddAssign for StegoCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
