//! 24-bit frame rasters.
//!
//! Design notes:
//! - Storage order is B,G,R per pixel; the blue byte sits at offset 0.
//! - `stride` is signed. A positive stride stores rows top-down; a
//!   negative stride stores them bottom-up (the first buffer row is the
//!   bottom image row). `|stride|` may exceed `3 * width` for padded rows.
//! - Validation happens at construction; accessors assume a valid frame
//!   and panic on out-of-range coordinates.

use std::fmt;

use num_enum::TryFromPrimitive;

use crate::constants::BYTES_PER_PIXEL;

/// Supported pixel layouts, keyed by bits per pixel.
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum PixelFormat {
    Bgr24 = 24,
}

impl PixelFormat {
    #[inline]
    pub const fn bits_per_pixel(self) -> u16 {
        self as u16
    }
}

/// Frame-level errors.
#[derive(Debug)]
pub enum FrameError {
    EmptyFrames,
    ZeroArea {
        width: u32,
        height: u32,
    },
    UnsupportedFormat {
        bits_per_pixel: u16,
    },
    StrideTooSmall {
        stride: i32,
        need: usize,
    },
    BufferLengthMismatch {
        have: usize,
        need: usize,
    },
    /// A frame in a sequence does not match the first frame's geometry.
    DimensionMismatch {
        index: usize,
        expected: (u32, u32),
        actual: (u32, u32),
    },
    SequenceLengthMismatch {
        have: usize,
        need: usize,
    },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use FrameError::*;
        match self {
            EmptyFrames => write!(f, "empty frame sequence"),
            ZeroArea { width, height } =>
                write!(f, "zero-area frame: {}x{}", width, height),
            UnsupportedFormat { bits_per_pixel } =>
                write!(f, "unsupported pixel format: {} bits per pixel", bits_per_pixel),
            StrideTooSmall { stride, need } =>
                write!(f, "stride too small: |{}| < {}", stride, need),
            BufferLengthMismatch { have, need } =>
                write!(f, "buffer length mismatch: {} != {}", have, need),
            DimensionMismatch { index, expected, actual } =>
                write!(
                    f,
                    "frame {} is {}x{}, expected {}x{}",
                    index, actual.0, actual.1, expected.0, expected.1
                ),
            SequenceLengthMismatch { have, need } =>
                write!(f, "sequence length mismatch: {} != {}", have, need),
        }
    }
}

impl std::error::Error for FrameError {}

/// An owned 24-bit raster.
///
/// Cloning a frame clones its pixel buffer; the codec clones covers before
/// mutating them and never aliases two frames over one buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    stride: i32,
    format: PixelFormat,
    data: Vec<u8>,
}

impl Frame {
    /// Zeroed top-down frame with a tight stride.
    pub fn new(width: u32, height: u32) -> Result<Self, FrameError> {
        let pitch = width as usize * BYTES_PER_PIXEL;
        Self::from_raw(
            width,
            height,
            pitch as i32,
            PixelFormat::Bgr24.bits_per_pixel(),
            vec![0u8; pitch * height as usize],
        )
    }

    /// Wrap an existing buffer.
    ///
    /// Rejects zero-area frames, non-24-bit formats, strides narrower than
    /// one pixel row, and buffers whose length disagrees with
    /// `|stride| * height`.
    pub fn from_raw(
        width: u32,
        height: u32,
        stride: i32,
        bits_per_pixel: u16,
        data: Vec<u8>,
    ) -> Result<Self, FrameError> {
        let format = PixelFormat::try_from(bits_per_pixel)
            .map_err(|_| FrameError::UnsupportedFormat { bits_per_pixel })?;
        if width == 0 || height == 0 {
            return Err(FrameError::ZeroArea { width, height });
        }
        let pitch = stride.unsigned_abs() as usize;
        let need = width as usize * BYTES_PER_PIXEL;
        if pitch < need {
            return Err(FrameError::StrideTooSmall { stride, need });
        }
        let need_len = pitch * height as usize;
        if data.len() != need_len {
            return Err(FrameError::BufferLengthMismatch {
                have: data.len(),
                need: need_len,
            });
        }
        Ok(Self { width, height, stride, format, data })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn stride(&self) -> i32 {
        self.stride
    }

    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw buffer in storage order.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Byte offset of the first row holding image row `y`.
    #[inline]
    fn row_start(&self, y: u32) -> usize {
        let pitch = self.stride.unsigned_abs() as usize;
        let row = if self.stride >= 0 { y } else { self.height - 1 - y };
        row as usize * pitch
    }

    /// Byte offset of pixel (x, y). Panics on out-of-range coordinates.
    #[inline]
    pub(crate) fn offset_of(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds for {}x{} frame",
            x,
            y,
            self.width,
            self.height
        );
        self.row_start(y) + x as usize * BYTES_PER_PIXEL
    }

    #[inline]
    pub fn blue(&self, x: u32, y: u32) -> u8 {
        self.data[self.offset_of(x, y)]
    }

    #[inline]
    pub fn green(&self, x: u32, y: u32) -> u8 {
        self.data[self.offset_of(x, y) + 1]
    }

    #[inline]
    pub fn red(&self, x: u32, y: u32) -> u8 {
        self.data[self.offset_of(x, y) + 2]
    }

    /// Whole pixel in storage order `[b, g, r]`.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let o = self.offset_of(x, y);
        [self.data[o], self.data[o + 1], self.data[o + 2]]
    }
}

/// Validate a frame sequence: non-empty, uniform geometry.
///
/// Returns the shared `(width, height)`.
pub fn validate_sequence(frames: &[Frame]) -> Result<(u32, u32), FrameError> {
    let first = frames.first().ok_or(FrameError::EmptyFrames)?;
    let expected = (first.width(), first.height());
    for (index, frame) in frames.iter().enumerate().skip(1) {
        let actual = (frame.width(), frame.height());
        if actual != expected {
            return Err(FrameError::DimensionMismatch { index, expected, actual });
        }
    }
    Ok(expected)
}
