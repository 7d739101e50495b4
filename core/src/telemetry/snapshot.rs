//! Immutable snapshot of one embed or extract run.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::StegoCounters;

/// Counters plus derived rates, frozen at the end of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StegoSnapshot {
    pub frames_processed: u64,
    pub bytes_message: u64,
    pub bits_payload: u64,
    pub bits_side_info: u64,
    pub pixel_collisions: u64,
    /// Carrier bits written or read per second over the whole run.
    pub throughput_bits_per_sec: f64,
    pub elapsed: Duration,
}

impl StegoSnapshot {
    pub fn from_counters(counters: &StegoCounters, elapsed: Duration) -> Self {
        let carrier_bits = counters.bits_payload + counters.bits_side_info;
        let throughput = if elapsed.as_secs_f64() > 0.0 {
            carrier_bits as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            frames_processed: counters.frames_processed,
            bytes_message: counters.bytes_message,
            bits_payload: counters.bits_payload,
            bits_side_info: counters.bits_side_info,
            pixel_collisions: counters.pixel_collisions,
            throughput_bits_per_sec: throughput,
            elapsed,
        }
    }

    /// JSON rendering for logs and external consumers.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// One-line human summary for debug logs.
    pub fn summary(&self) -> String {
        format!(
            "{} frames, {} message bytes, {} carrier bits, {} collisions, {:?}",
            self.frames_processed,
            self.bytes_message,
            self.bits_payload + self.bits_side_info,
            self.pixel_collisions,
            self.elapsed
        )
    }
}
