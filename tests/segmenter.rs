mod tests {
    use infinity_mirror::{Rgb, SegmentError, StripSegmenter, Style, segment};

    /// Distinct pixel per index, `px(0)` reads as `A`, `px(1)` as `B`, ...
    fn px(idx: usize) -> Rgb {
        Rgb {
            r: u8::try_from(idx + 1).unwrap(),
            g: 0,
            b: 0,
        }
    }

    fn base(len: usize) -> Vec<Rgb> {
        (0..len).map(px).collect()
    }

    fn letters(pixels: &[Rgb]) -> String {
        pixels
            .iter()
            .map(|p| char::from(b'A' + p.r - 1))
            .collect()
    }

    fn render(style: Style, side: usize) -> Vec<Rgb> {
        let base = base(style.base_len(side));
        let mut out = vec![Rgb::default(); side * 4];
        segment(style, side, &base, &mut out).unwrap();
        out
    }

    fn sides(out: &[Rgb], side: usize) -> Vec<String> {
        out.chunks(side).map(letters).collect()
    }

    #[test]
    fn test_output_always_covers_full_loop() {
        for side in [1, 2, 3, 4, 5, 13, 20] {
            for style in Style::ALL {
                let mut segmenter = StripSegmenter::<80>::new(side).unwrap();
                segmenter.set_style(style);
                let frame = segmenter.process(&base(style.base_len(side))).unwrap();
                assert_eq!(frame.len(), side * 4, "{style:?} L={side}");
            }
        }
    }

    #[test]
    fn test_full_strip_is_identity() {
        let out = render(Style::FullStrip, 5);
        assert_eq!(out, base(20));
    }

    #[test]
    fn test_copied_sides() {
        let out = render(Style::CopiedSides, 4);
        assert_eq!(sides(&out, 4), ["ABCD", "ABCD", "ABCD", "ABCD"]);
    }

    #[test]
    fn test_periodic_opposite_corners_4() {
        let side = 5;
        let out = render(Style::PeriodicOppositeCorners4, side);
        let (bottom, rest) = out.split_at(side);
        let (right, rest) = rest.split_at(side);
        let (top, left) = rest.split_at(side);

        assert_eq!(bottom, base(side).as_slice());
        assert_eq!(top, bottom);
        assert!(right.iter().eq(bottom.iter().rev()));
        assert!(left.iter().eq(top.iter().rev()));
    }

    #[test]
    fn test_periodic_opposite_corners_2() {
        let side = 4;
        let out = render(Style::PeriodicOppositeCorners2, side);
        let (first, second) = out.split_at(side * 2);
        assert!(second.iter().eq(first.iter().rev()));
        assert_eq!(sides(&out, side), ["ABCD", "EFGH", "HGFE", "DCBA"]);
    }

    #[test]
    fn test_unidirectional_side_to_side() {
        let out = render(Style::UnidirectionalSideToSide, 4);
        assert_eq!(sides(&out, 4), ["AAAA", "BCDE", "FFFF", "EDCB"]);
    }

    #[test]
    fn test_bidirectional_side_to_side() {
        assert_eq!(
            sides(&render(Style::BidirectionalSideToSide, 4), 4),
            ["AAAA", "BCCB", "AAAA", "BCCB"]
        );
        assert_eq!(
            sides(&render(Style::BidirectionalSideToSide, 5), 5),
            ["AAAAA", "BCDCB", "AAAAA", "BCDCB"]
        );
    }

    #[test]
    fn test_halfway_split_even_side() {
        assert_eq!(
            sides(&render(Style::HalfwayPeriodicSplit2, 4), 4),
            ["BAAB", "CDDC", "BAAB", "CDDC"]
        );
    }

    #[test]
    fn test_halfway_split_odd_side() {
        assert_eq!(
            sides(&render(Style::HalfwayPeriodicSplit2, 5), 5),
            ["CBABC", "DEFED", "CBABC", "DEFED"]
        );
    }

    #[test]
    fn test_single_led_sides() {
        assert_eq!(
            sides(&render(Style::UnidirectionalSideToSide, 1), 1),
            ["A", "B", "C", "B"]
        );
        assert_eq!(
            sides(&render(Style::BidirectionalSideToSide, 1), 1),
            ["A", "B", "A", "B"]
        );
        assert_eq!(
            sides(&render(Style::HalfwayPeriodicSplit2, 1), 1),
            ["A", "B", "A", "B"]
        );
    }

    #[test]
    fn test_short_base_is_rejected() {
        let mut segmenter = StripSegmenter::<16>::new(4).unwrap();
        segmenter.set_style(Style::CopiedSides);
        segmenter.process(&base(4)).unwrap();
        let before = segmenter.output().to_vec();

        assert_eq!(
            segmenter.process(&base(3)),
            Err(SegmentError::BaseTooShort {
                required: 4,
                provided: 3
            })
        );
        assert_eq!(segmenter.output(), before.as_slice());
    }

    #[test]
    fn test_extra_base_pixels_are_ignored() {
        let mut segmenter = StripSegmenter::<16>::new(4).unwrap();
        segmenter.set_style(Style::CopiedSides);
        let frame = segmenter.process(&base(10)).unwrap();
        assert_eq!(letters(frame), "ABCDABCDABCDABCD");
    }

    #[test]
    fn test_short_output_is_rejected() {
        let mut out = vec![Rgb::default(); 15];
        assert_eq!(
            segment(Style::CopiedSides, 4, &base(4), &mut out),
            Err(SegmentError::OutputTooShort {
                required: 16,
                provided: 15
            })
        );
    }

    #[test]
    fn test_huge_side_is_rejected() {
        let mut out = vec![Rgb::default(); 16];
        assert_eq!(
            segment(Style::FullStrip, usize::MAX / 2, &base(4), &mut out),
            Err(SegmentError::BaseTooShort {
                required: usize::MAX,
                provided: 4
            })
        );
        assert!(StripSegmenter::<16>::new(usize::MAX / 2).is_err());
    }

    #[test]
    fn test_segmenter_style_cycling() {
        let mut segmenter = StripSegmenter::<16>::new(4).unwrap();
        assert_eq!(segmenter.style(), Style::FullStrip);
        assert_eq!(segmenter.base_len(), 16);
        assert_eq!(segmenter.next_style(), Style::CopiedSides);
        assert_eq!(segmenter.base_len(), 4);
        assert_eq!(segmenter.prev_style(), Style::FullStrip);
        assert_eq!(segmenter.prev_style(), Style::HalfwayPeriodicSplit2);
    }
}
