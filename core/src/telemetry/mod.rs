//! Run telemetry: mutable counters and immutable snapshots.
//!
//! Counters accumulate while a traversal runs; a snapshot freezes them
//! with derived rates when the run ends. Embed/extract correctness never
//! depends on telemetry.

pub mod counters;
pub mod snapshot;

pub use counters::*;
pub use snapshot::*;
