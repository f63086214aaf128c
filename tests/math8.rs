mod tests {
    use embassy_time::Duration;
    use infinity_mirror::math8::{
        beat8, beat16, beatsin8, beatsin16, blend8, scale8, scale8_video, spread8,
    };

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_scale8_video_keeps_lit_pixels_lit() {
        assert_eq!(scale8_video(1, 1), 1);
        assert_eq!(scale8_video(0, 255), 0);
        assert_eq!(scale8_video(255, 0), 0);
        assert_eq!(scale8_video(255, 255), 255);
    }

    #[test]
    fn test_blend8() {
        assert_eq!(blend8(255, 128, 128), 191);
        assert_eq!(blend8(0, 128, 255), 128);
        assert_eq!(blend8(255, 0, 128), 127);
        assert_eq!(blend8(255, 128, 0), 255);
    }

    #[test]
    fn test_beat() {
        assert_eq!(beat16(60, Duration::from_millis(0)), 0);
        assert_eq!(beat16(60, Duration::from_millis(500)), 32_768);
        assert_eq!(beat16(60, Duration::from_millis(1_000)), 0);
        assert_eq!(beat8(60, Duration::from_millis(250)), 64);
    }

    #[test]
    fn test_beatsin_stays_in_range() {
        for ms in (0..10_000).step_by(7) {
            let elapsed = Duration::from_millis(ms);
            let value = beatsin16(13, 0, 52, elapsed, 0);
            assert!(value < 52);
            let value = beatsin8(26, 64, 255, elapsed);
            assert!(value >= 64);
        }
    }

    #[test]
    fn test_beatsin_starts_mid_range() {
        assert_eq!(beatsin16(13, 0, 52, Duration::from_millis(0), 0), 26);
        assert_eq!(beatsin16(13, 10, 20, Duration::from_millis(0), 0), 15);
    }

    #[test]
    fn test_spread8() {
        assert_eq!(spread8(0, 5, 255), 0);
        assert_eq!(spread8(4, 5, 255), 255);
        assert_eq!(spread8(2, 5, 200), 100);
        assert_eq!(spread8(0, 1, 255), 0);
    }
}
