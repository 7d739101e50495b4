// Validates the scoped pixel accessor: journaled writes, read-your-writes,
// and commit on release.

#[cfg(test)]
mod tests {
    use vidsteg_core::video::{Frame, PixelGuard};

    fn frame_2x2() -> Frame {
        Frame::from_raw(2, 2, 6, 24, (0u8..12).collect()).unwrap()
    }

    #[test]
    fn reads_see_journaled_writes() {
        let mut frame = frame_2x2();
        let mut guard = PixelGuard::new(&mut frame);

        assert_eq!(guard.blue(1, 0), 3);
        guard.set_blue(1, 0, 0xAA);
        assert_eq!(guard.blue(1, 0), 0xAA);
        assert_eq!(guard.pixel(1, 0), [0xAA, 4, 5]);
    }

    #[test]
    fn writes_commit_on_release() {
        let mut frame = frame_2x2();
        {
            let mut guard = PixelGuard::new(&mut frame);
            guard.set_blue(0, 1, 0x11);
            guard.set_green(0, 1, 0x22);
            guard.set_red(0, 1, 0x33);
            assert_eq!(guard.pending(), 3);
            // not visible in the raster until the guard drops
        }
        assert_eq!(frame.pixel(0, 1), [0x11, 0x22, 0x33]);
    }

    #[test]
    fn untouched_bytes_survive_commit() {
        let mut frame = frame_2x2();
        let before = frame.as_bytes().to_vec();
        {
            let mut guard = PixelGuard::new(&mut frame);
            guard.set_blue(1, 1, 0xFF);
        }
        for (offset, (&a, &b)) in before.iter().zip(frame.as_bytes()).enumerate() {
            if offset == 9 {
                assert_eq!(b, 0xFF);
            } else {
                assert_eq!(a, b, "byte {} changed", offset);
            }
        }
    }

    #[test]
    fn whole_pixel_roundtrip() {
        let mut frame = frame_2x2();
        {
            let mut guard = PixelGuard::new(&mut frame);
            guard.set_pixel(1, 1, [1, 2, 3]);
            assert_eq!(guard.pixel(1, 1), [1, 2, 3]);
        }
        assert_eq!(frame.pixel(1, 1), [1, 2, 3]);
    }

    // Guarded writes honor the frame's stride convention.

    #[test]
    fn bottomup_guard_writes_land_in_the_right_row() {
        let mut frame = Frame::from_raw(2, 2, -6, 24, vec![0u8; 12]).unwrap();
        {
            let mut guard = PixelGuard::new(&mut frame);
            guard.set_blue(0, 0, 0x7F);
        }
        // image row 0 lives in the second buffer row
        assert_eq!(frame.as_bytes()[6], 0x7F);
        assert_eq!(frame.blue(0, 0), 0x7F);
    }

    #[test]
    fn last_write_wins() {
        let mut frame = frame_2x2();
        {
            let mut guard = PixelGuard::new(&mut frame);
            guard.set_blue(0, 0, 1);
            guard.set_blue(0, 0, 2);
            guard.set_blue(0, 0, 3);
            assert_eq!(guard.pending(), 1);
        }
        assert_eq!(frame.blue(0, 0), 3);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn guarded_out_of_bounds_write_panics() {
        let mut frame = frame_2x2();
        let mut guard = PixelGuard::new(&mut frame);
        guard.set_blue(5, 5, 0);
    }
}
