// Validates frame construction, stride conventions of both signs, and
// sequence validation.

#[cfg(test)]
mod tests {
    use vidsteg_core::video::{validate_sequence, Frame, FrameError, PixelFormat};

    fn counting_buffer(len: usize) -> Vec<u8> {
        (0..len).map(|j| (j % 256) as u8).collect()
    }

    #[test]
    fn new_builds_zeroed_topdown_frame() {
        let frame = Frame::new(4, 3).unwrap();
        assert_eq!(frame.width(), 4);
        assert_eq!(frame.height(), 3);
        assert_eq!(frame.stride(), 12);
        assert_eq!(frame.format(), PixelFormat::Bgr24);
        assert_eq!(frame.pixel_count(), 12);
        assert!(frame.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn zero_area_is_rejected() {
        assert!(matches!(
            Frame::from_raw(0, 3, 0, 24, vec![]),
            Err(FrameError::ZeroArea { .. })
        ));
        assert!(matches!(Frame::new(5, 0), Err(FrameError::ZeroArea { .. })));
    }

    #[test]
    fn non_24bit_formats_are_rejected() {
        for bpp in [8u16, 16, 32] {
            assert!(matches!(
                Frame::from_raw(2, 2, 6, bpp, counting_buffer(12)),
                Err(FrameError::UnsupportedFormat { bits_per_pixel }) if bits_per_pixel == bpp
            ));
        }
    }

    #[test]
    fn narrow_stride_is_rejected() {
        assert!(matches!(
            Frame::from_raw(4, 2, 10, 24, counting_buffer(20)),
            Err(FrameError::StrideTooSmall { .. })
        ));
    }

    #[test]
    fn buffer_length_must_match_stride_times_height() {
        assert!(matches!(
            Frame::from_raw(2, 2, 6, 24, counting_buffer(13)),
            Err(FrameError::BufferLengthMismatch { have: 13, need: 12 })
        ));
    }

    // Positive stride: row y starts at y * stride.

    #[test]
    fn topdown_addressing() {
        let frame = Frame::from_raw(2, 3, 6, 24, counting_buffer(18)).unwrap();
        assert_eq!(frame.blue(0, 0), 0);
        assert_eq!(frame.green(0, 0), 1);
        assert_eq!(frame.red(0, 0), 2);
        assert_eq!(frame.blue(1, 2), 15);
        assert_eq!(frame.pixel(1, 1), [9, 10, 11]);
    }

    // Negative stride: the buffer is stored bottom-up, so image row 0 is
    // the last buffer row.

    #[test]
    fn bottomup_addressing() {
        let frame = Frame::from_raw(2, 3, -6, 24, counting_buffer(18)).unwrap();
        assert_eq!(frame.blue(0, 0), 12);
        assert_eq!(frame.red(1, 2), 5);
        assert_eq!(frame.pixel(0, 1), [6, 7, 8]);
    }

    // Padded rows: |stride| beyond 3 * width leaves slack bytes untouched.

    #[test]
    fn padded_stride_addressing() {
        let frame = Frame::from_raw(2, 2, 8, 24, counting_buffer(16)).unwrap();
        assert_eq!(frame.blue(0, 1), 8);
        assert_eq!(frame.red(1, 1), 13);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn out_of_bounds_access_panics() {
        let frame = Frame::new(2, 2).unwrap();
        let _ = frame.blue(2, 0);
    }

    #[test]
    fn sequence_validation() {
        let frames = vec![Frame::new(8, 6).unwrap(), Frame::new(8, 6).unwrap()];
        assert_eq!(validate_sequence(&frames).unwrap(), (8, 6));

        assert!(matches!(validate_sequence(&[]), Err(FrameError::EmptyFrames)));

        let mixed = vec![Frame::new(8, 6).unwrap(), Frame::new(8, 7).unwrap()];
        assert!(matches!(
            validate_sequence(&mixed),
            Err(FrameError::DimensionMismatch { index: 1, .. })
        ));
    }
}
