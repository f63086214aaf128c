use smart_leds::hsv::hsv2rgb;

use crate::color::{Hsv, Rgb};

/// Fully saturated, full brightness color at `hue` on the 0-255 color wheel
#[inline]
pub fn hue_wheel(hue: u8) -> Rgb {
    hsv2rgb(Hsv {
        hue,
        sat: 255,
        val: 255,
    })
}

/// Fill with a rainbow starting at `start_hue`, advancing `hue_step` per LED
pub fn fill_rainbow(leds: &mut [Rgb], start_hue: u8, hue_step: u8) {
    let mut hue = start_hue;
    for led in leds {
        *led = hue_wheel(hue);
        hue = hue.wrapping_add(hue_step);
    }
}
