use crate::{
    crypto::SeedError,
    payload::PayloadError,
    stego::{EmbedError, ExtractError},
    video::FrameError,
};

/// Unified error covering seed derivation, frame validation, payload
/// framing, and the embed/extract pipeline.
/// - Ergonomic `From<T>` impls enable `?` across the pipeline.
/// - Messages aim to be stable and contextual for logs and UIs.
#[derive(Debug, thiserror::Error)]
pub enum StegoError {
    /// Key digest error (empty or unusable key).
    #[error("seed error: {0}")]
    Seed(#[from] SeedError),

    /// Frame-level error (dimensions, stride, or pixel format).
    #[error("frame error: {0}")]
    Frame(#[from] FrameError),

    /// Payload-level error (length prefix or digest verification).
    #[error("payload error: {0}")]
    Payload(#[from] PayloadError),

    /// Embed-level error (validation or capacity).
    #[error("embed error: {0}")]
    Embed(#[from] EmbedError),

    /// Extract-level error (length probe, capacity, or hash check).
    #[error("extract error: {0}")]
    Extract(#[from] ExtractError),

    /// Generic high-level validation with a descriptive message.
    #[error("validation error: {0}")]
    Validation(String),
}
