//! Chaotic traversal stream.
//!
//! The logistic map `x_{n+1} = r * x_n * (1 - x_n)` with `r = 3.99` drives
//! the order in which pixels are visited. The sequence is the only stateful
//! entity in the codec: `Initial(x0)` after construction or [`reset`],
//! `Advanced(x_n)` after `n` calls to [`next`].
//!
//! Contracts the embed/extract pair leans on:
//! - Two sequences built from the same key produce identical streams.
//! - After [`reset`] a sequence produces the same stream as a fresh one.
//!
//! [`next`]: ChaoticSequence::next
//! [`reset`]: ChaoticSequence::reset

use crate::constants::{LOGISTIC_R, SEED_SCALE, SEED_SPAN};
use crate::crypto::seed::{derive_seed, SeedError};

/// Deterministic real-valued stream projected into pixel indices.
#[derive(Debug, Clone)]
pub struct ChaoticSequence {
    x: f64,
    x0: f64,
}

impl ChaoticSequence {
    /// Build from a raw seed.
    ///
    /// `x0 = ((|seed| mod 9999) + 1) / 10000`, so `x0` lands in
    /// `[0.0001, 0.9999]` and never on the map's fixed points.
    pub fn from_seed(seed: i32) -> Self {
        let x0 = f64::from((seed.unsigned_abs() % SEED_SPAN) + 1) / SEED_SCALE;
        debug_assert!(x0 > 0.0 && x0 < 1.0);
        Self { x: x0, x0 }
    }

    /// Build from a textual key (derives the seed first).
    pub fn from_key(key: &str) -> Result<Self, SeedError> {
        Ok(Self::from_seed(derive_seed(key)?))
    }

    /// Advance one step and return the new state.
    #[inline]
    pub fn next(&mut self) -> f64 {
        self.x = LOGISTIC_R * (self.x * (1.0 - self.x));
        self.x
    }

    /// Advance one step and project into `[0, n)`.
    ///
    /// The raw stream may produce the same index more than once, and it
    /// clusters near the ends of the range; the traversal layer resolves
    /// re-selection deterministically.
    #[inline]
    pub fn next_index(&mut self, n: usize) -> usize {
        debug_assert!(n > 0, "next_index over an empty range");
        ((self.next() * n as f64) as usize) % n
    }

    /// Rewind to the initial state.
    #[inline]
    pub fn reset(&mut self) {
        self.x = self.x0;
    }

    /// Current state (diagnostics only).
    #[inline]
    pub fn state(&self) -> f64 {
        self.x
    }
}
