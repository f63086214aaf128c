//! 8 and 16-bit fixed-point helpers
//!
//! Integer math for efficiency on embedded systems. Periodic waves are driven
//! by the time elapsed since an effect was entered, so every effect owns its
//! own timebase.

use core::f32::consts::TAU;

use embassy_time::Duration;

const MS_PER_MINUTE: u64 = 60_000;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Scale an 8-bit value, never dropping a non-zero value to zero
///
/// A non-zero `value` scaled by a non-zero `scale` yields at least 1.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8_video(value: u8, scale: u8) -> u8 {
    let scaled = ((value as u16 * scale as u16) >> 8) as u8;
    if value != 0 && scale != 0 {
        scaled + 1
    } else {
        scaled
    }
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16; // a * 65536
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    ); // (b - a) * amount_of_b * 257
    partial = partial.wrapping_add(0x8000); // + 32768 for rounding

    (partial >> 16) as u8
}

/// Sawtooth rising from 0 to 65535 `bpm` times per minute
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn beat16(bpm: u16, elapsed: Duration) -> u16 {
    let phase_ms = (elapsed.as_millis() * bpm as u64) % MS_PER_MINUTE;
    ((phase_ms << 16) / MS_PER_MINUTE) as u16
}

/// Sawtooth rising from 0 to 255 `bpm` times per minute
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn beat8(bpm: u16, elapsed: Duration) -> u8 {
    (beat16(bpm, elapsed) >> 8) as u8
}

/// Sine of an angle given as a fraction of a full turn (0-65535)
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn sin16(theta: u16) -> i16 {
    let radians = f32::from(theta) * TAU / 65_536.0;
    (libm::sinf(radians) * 32_767.0) as i16
}

/// Sine wave oscillating between `low` and `high` (exclusive) `bpm` times per
/// minute
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn beatsin16(bpm: u16, low: u16, high: u16, elapsed: Duration, phase: u16) -> u16 {
    let theta = beat16(bpm, elapsed).wrapping_add(phase);
    let wave = (i32::from(sin16(theta)) + 32_768) as u32; // 1..=65535
    let range = u32::from(high.saturating_sub(low));
    low + ((wave * range) >> 16) as u16
}

/// Sine wave oscillating between `low` and `high` (exclusive) `bpm` times per
/// minute
#[allow(clippy::cast_possible_truncation)]
pub fn beatsin8(bpm: u16, low: u8, high: u8, elapsed: Duration) -> u8 {
    beatsin16(bpm, u16::from(low), u16::from(high), elapsed, 0) as u8
}

/// Map `index` of `count` evenly onto 0..=`span`
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn spread8(index: usize, count: usize, span: u8) -> u8 {
    if count <= 1 {
        return 0;
    }
    ((index * span as usize) / (count - 1)) as u8
}
