//! vidsteg-core
//!
//! Pure Rust reversible LSB video steganography engine.
//! No codec bindings, no GUI, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Shared and top level module
pub mod crypto;
pub mod payload;
pub mod telemetry;
pub mod video;

// Embedding / extraction layer
pub mod stego;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::crypto::{derive_seed, ChaoticSequence};
    pub use crate::stego::{embed, extract, ExtractOutcome, ProgressSink};
    pub use crate::types::StegoError;
    pub use crate::video::{Frame, PixelFormat, PixelGuard};
}
