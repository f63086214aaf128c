mod tests {
    use infinity_mirror::color::{
        Rgb, blend_colors, fade_to_black_by, fade_toward_color, fill_rainbow, hue_wheel,
        is_all_of_color, saturating_max,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_blend_colors() {
        assert_eq!(blend_colors(RED, BLUE, 0), RED);
        assert_eq!(blend_colors(RED, BLUE, 255), BLUE);
        assert_eq!(
            blend_colors(RED, BLUE, 128),
            Rgb {
                r: 127,
                g: 0,
                b: 128
            }
        );

        assert_eq!(
            blend_colors(BLACK, WHITE, 128),
            Rgb {
                r: 128,
                g: 128,
                b: 128
            }
        );
        assert_eq!(blend_colors(WHITE, BLACK, 255), BLACK);
        assert_eq!(blend_colors(WHITE, BLACK, 0), WHITE);
    }

    #[test]
    fn test_fade_toward_color_converges() {
        let mut leds = [BLACK, RED, BLUE];
        fade_toward_color(&mut leds, WHITE, 16);
        assert_eq!(leds[0], Rgb { r: 16, g: 16, b: 16 });
        assert_eq!(leds[1], Rgb { r: 255, g: 16, b: 16 });

        for _ in 0..300 {
            fade_toward_color(&mut leds, WHITE, 16);
        }
        assert!(is_all_of_color(&leds, WHITE));
    }

    #[test]
    fn test_fade_toward_color_never_overshoots() {
        let mut leds = [Rgb { r: 1, g: 254, b: 100 }];
        fade_toward_color(&mut leds, Rgb { r: 0, g: 255, b: 100 }, 255);
        assert_eq!(leds[0], Rgb { r: 0, g: 255, b: 100 });
    }

    #[test]
    fn test_fade_to_black_by() {
        let mut leds = [WHITE, RED];
        fade_to_black_by(&mut leds, 255);
        assert!(is_all_of_color(&leds, BLACK));

        let mut leds = [WHITE];
        fade_to_black_by(&mut leds, 0);
        assert_eq!(leds, [WHITE]);
    }

    #[test]
    fn test_saturating_max() {
        assert_eq!(
            saturating_max(RED, Rgb { r: 10, g: 20, b: 30 }),
            Rgb { r: 255, g: 20, b: 30 }
        );
    }

    #[test]
    fn test_fill_rainbow() {
        let mut leds = [BLACK; 3];
        fill_rainbow(&mut leds, 250, 10);
        assert_eq!(leds, [hue_wheel(250), hue_wheel(4), hue_wheel(14)]);
    }
}
