use crate::constants::PSNR_CAP_DB;
use crate::video::{Frame, FrameError};

/// Peak signal-to-noise ratio between two frames, in dB.
///
/// Mean squared error is taken over all three channels of every pixel;
/// identical content reports [`PSNR_CAP_DB`]. Diagnostic only, no part of
/// embed/extract correctness.
pub fn psnr(a: &Frame, b: &Frame) -> Result<f64, FrameError> {
    if (a.width(), a.height()) != (b.width(), b.height()) {
        return Err(FrameError::DimensionMismatch {
            index: 0,
            expected: (a.width(), a.height()),
            actual: (b.width(), b.height()),
        });
    }

    let mut sum_sq: u64 = 0;
    for y in 0..a.height() {
        for x in 0..a.width() {
            let pa = a.pixel(x, y);
            let pb = b.pixel(x, y);
            for c in 0..3 {
                let d = i64::from(pa[c]) - i64::from(pb[c]);
                sum_sq += (d * d) as u64;
            }
        }
    }

    let samples = 3 * a.pixel_count() as u64;
    let mse = sum_sq as f64 / samples as f64;
    if mse == 0.0 {
        Ok(PSNR_CAP_DB)
    } else {
        Ok(10.0 * (255.0f64 * 255.0 / mse).log10())
    }
}

/// Mean per-frame PSNR across a cover/stego pair of sequences.
pub fn psnr_sequence(a: &[Frame], b: &[Frame]) -> Result<f64, FrameError> {
    if a.is_empty() || b.is_empty() {
        return Err(FrameError::EmptyFrames);
    }
    if a.len() != b.len() {
        return Err(FrameError::SequenceLengthMismatch { have: b.len(), need: a.len() });
    }

    let mut sum = 0.0;
    for (fa, fb) in a.iter().zip(b) {
        sum += psnr(fa, fb)?;
    }
    Ok(sum / a.len() as f64)
}
