pub use smart_leds::hsv::hsv2rgb;

use crate::{
    color::Rgb,
    math8::{blend8, scale8, scale8_video},
};

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub fn blend_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
    }
}

/// Move one channel toward a target by a fraction of the remaining distance
///
/// Always moves by at least one step, so repeated calls reach the target.
#[inline]
const fn nudge8(current: u8, target: u8, amount: u8) -> u8 {
    if current < target {
        current + scale8_video(target - current, amount)
    } else {
        current - scale8_video(current - target, amount)
    }
}

/// Fade every pixel toward `target` in place
pub fn fade_toward_color(leds: &mut [Rgb], target: Rgb, amount: u8) {
    for led in leds {
        led.r = nudge8(led.r, target.r, amount);
        led.g = nudge8(led.g, target.g, amount);
        led.b = nudge8(led.b, target.b, amount);
    }
}

/// Dim every pixel by `amount` (0-255) in place
pub fn fade_to_black_by(leds: &mut [Rgb], amount: u8) {
    let keep = 255 - amount;
    for led in leds {
        led.r = scale8(led.r, keep);
        led.g = scale8(led.g, keep);
        led.b = scale8(led.b, keep);
    }
}

/// Per-channel maximum of two colors
#[inline]
pub fn saturating_max(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: a.r.max(b.r),
        g: a.g.max(b.g),
        b: a.b.max(b.b),
    }
}

/// Check if every pixel equals `target`
pub fn is_all_of_color(leds: &[Rgb], target: Rgb) -> bool {
    leds.iter().all(|led| *led == target)
}
