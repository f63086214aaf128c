//! Strip segmenter
//!
//! Copies or mirrors a base pattern across the full loop using 1, 2 or 4-fold
//! symmetry as dictated by a [`Style`]. The output is rebuilt completely on
//! every call, there is no partial update.

use crate::{
    color::Rgb,
    error::{ConfigError, SegmentError},
    geometry::{Geometry, SIDES},
    style::Style,
};

/// Copy `base` into `out` back-to-front
fn flip(out: &mut [Rgb], base: &[Rgb]) {
    for (pixel, value) in out.iter_mut().zip(base.iter().rev()) {
        *pixel = *value;
    }
}

/// Make the top and left sides an exact copy of the bottom and right sides
fn repeat_half(out: &mut [Rgb], side: usize) {
    let (bottom_right, top_left) = out.split_at_mut(side * 2);
    top_left.copy_from_slice(bottom_right);
}

/// Map the base pattern onto the full loop
///
/// `base` must hold at least `style.base_len(side)` pixels, extra pixels are
/// ignored. `out` must hold at least `4 * side` pixels, only the first
/// `4 * side` are written.
///
/// Worked examples for `L = 4` (sides separated by `/`):
///
/// ```text
/// copied sides            ABCD   -> ABCD / ABCD / ABCD / ABCD
/// opposite corners, N=4   ABCD   -> ABCD / DCBA / ABCD / DCBA
/// opposite corners, N=2   ABCDEFGH -> ABCD / EFGH / HGFE / DCBA
/// uni-directional         ABCDEF -> AAAA / BCDE / FFFF / EDCB
/// bi-directional          ABC    -> AAAA / BCCB / AAAA / BCCB
/// half-way split, N=2     ABCD   -> BAAB / CDDC / BAAB / CDDC
/// ```
pub fn segment(
    style: Style,
    side: usize,
    base: &[Rgb],
    out: &mut [Rgb],
) -> Result<(), SegmentError> {
    let required = style.base_len(side);
    if base.len() < required {
        return Err(SegmentError::BaseTooShort {
            required,
            provided: base.len(),
        });
    }
    let leds = side.saturating_mul(SIDES);
    if out.len() < leds {
        return Err(SegmentError::OutputTooShort {
            required: leds,
            provided: out.len(),
        });
    }

    let base = &base[..required];
    let out = &mut out[..leds];

    match style {
        Style::FullStrip => out.copy_from_slice(base),
        Style::CopiedSides => {
            for chunk in out.chunks_exact_mut(side) {
                chunk.copy_from_slice(base);
            }
        }
        Style::PeriodicOppositeCorners4 => {
            let (bottom, right) = out[..side * 2].split_at_mut(side);
            bottom.copy_from_slice(base);
            flip(right, base);
            repeat_half(out, side);
        }
        Style::PeriodicOppositeCorners2 => {
            let (bottom_right, top_left) = out.split_at_mut(side * 2);
            bottom_right.copy_from_slice(base);
            flip(top_left, base);
        }
        Style::UnidirectionalSideToSide => {
            let travelling = &base[1..=side];
            let (bottom, rest) = out.split_at_mut(side);
            let (right, rest) = rest.split_at_mut(side);
            let (top, left) = rest.split_at_mut(side);
            bottom.fill(base[0]);
            right.copy_from_slice(travelling);
            top.fill(base[side + 1]);
            flip(left, travelling);
        }
        Style::BidirectionalSideToSide => {
            let (bottom, right) = out[..side * 2].split_at_mut(side);
            bottom.fill(base[0]);
            let turn = side / 2;
            for (idx, pixel) in right.iter_mut().enumerate() {
                *pixel = if idx < turn {
                    base[idx + 1]
                } else {
                    base[side - idx]
                };
            }
            repeat_half(out, side);
        }
        Style::HalfwayPeriodicSplit2 => {
            // For odd `L` the bottom-left flip and the corner copy overlap on
            // exactly one pixel, both write `base[0]` there.
            let half = required / 2;
            let offset = side / 2;
            flip(&mut out[..half], &base[..half]);
            out[offset..offset + side].copy_from_slice(&base[..side]);
            flip(&mut out[offset + side..side * 2], &base[half..]);
            repeat_half(out, side);
        }
    }

    Ok(())
}

/// Segmenter owning the full loop output buffer
#[derive(Debug, Clone)]
pub struct StripSegmenter<const MAX_LEDS: usize> {
    geometry: Geometry,
    style: Style,
    output: [Rgb; MAX_LEDS],
}

impl<const MAX_LEDS: usize> StripSegmenter<MAX_LEDS> {
    /// Create a segmenter for a mirror with `side` LEDs per side
    ///
    /// Starts with [`Style::FullStrip`] and a black output.
    pub fn new(side: usize) -> Result<Self, ConfigError> {
        Ok(Self::with_geometry(Geometry::new(side, MAX_LEDS)?))
    }

    pub(crate) const fn with_geometry(geometry: Geometry) -> Self {
        Self {
            geometry,
            style: Style::FullStrip,
            output: [Rgb { r: 0, g: 0, b: 0 }; MAX_LEDS],
        }
    }

    pub const fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub const fn style(&self) -> Style {
        self.style
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    /// Switch to the next style and return it
    pub fn next_style(&mut self) -> Style {
        self.style = self.style.next();
        self.style
    }

    /// Switch to the previous style and return it
    pub fn prev_style(&mut self) -> Style {
        self.style = self.style.prev();
        self.style
    }

    /// Number of base pixels the current style needs
    pub const fn base_len(&self) -> usize {
        self.style.base_len(self.geometry.side())
    }

    /// Rebuild the output from `base`
    ///
    /// On error the previous output is left untouched.
    pub fn process(&mut self, base: &[Rgb]) -> Result<&[Rgb], SegmentError> {
        let leds = self.geometry.led_count();
        segment(
            self.style,
            self.geometry.side(),
            base,
            &mut self.output[..leds],
        )?;
        Ok(&self.output[..leds])
    }

    /// Output of the last successful `process` call
    pub fn output(&self) -> &[Rgb] {
        &self.output[..self.geometry.led_count()]
    }
}
