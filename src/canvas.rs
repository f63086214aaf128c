//! Base buffer paired with the segmenter
//!
//! Effects draw into the base buffer, whose logical length follows the
//! active style. Rendering maps it onto the full loop.

use crate::{
    color::{BLACK, Rgb},
    error::{ConfigError, SegmentError},
    geometry::Geometry,
    segmenter::StripSegmenter,
    style::Style,
};

#[derive(Debug, Clone)]
pub struct Canvas<const MAX_LEDS: usize> {
    segmenter: StripSegmenter<MAX_LEDS>,
    base: [Rgb; MAX_LEDS],
}

impl<const MAX_LEDS: usize> Canvas<MAX_LEDS> {
    pub fn new(side: usize) -> Result<Self, ConfigError> {
        Ok(Self::with_geometry(Geometry::new(side, MAX_LEDS)?))
    }

    pub(crate) const fn with_geometry(geometry: Geometry) -> Self {
        Self {
            segmenter: StripSegmenter::with_geometry(geometry),
            base: [BLACK; MAX_LEDS],
        }
    }

    pub const fn geometry(&self) -> Geometry {
        self.segmenter.geometry()
    }

    pub const fn style(&self) -> Style {
        self.segmenter.style()
    }

    /// Switch style and discard the base pattern
    pub fn set_style(&mut self, style: Style) {
        self.segmenter.set_style(style);
        self.base.fill(BLACK);
    }

    /// Number of base pixels `s` of the active style
    pub const fn base_len(&self) -> usize {
        self.segmenter.base_len()
    }

    pub fn base(&self) -> &[Rgb] {
        &self.base[..self.base_len()]
    }

    pub fn base_mut(&mut self) -> &mut [Rgb] {
        let len = self.base_len();
        &mut self.base[..len]
    }

    /// Base pattern for writing, next to the frame currently on the mirror
    pub fn split_mut(&mut self) -> (&mut [Rgb], &[Rgb]) {
        let len = self.segmenter.base_len();
        (&mut self.base[..len], self.segmenter.output())
    }

    /// Map the base pattern onto the full loop
    pub fn render(&mut self) -> Result<&[Rgb], SegmentError> {
        let len = self.segmenter.base_len();
        self.segmenter.process(&self.base[..len])
    }

    /// Last rendered frame
    pub fn output(&self) -> &[Rgb] {
        self.segmenter.output()
    }
}
