//! Colored stripes pulsing at a fixed beats-per-minute

use super::{Effect, FrameContext, Progress};
use crate::{
    color::{Hsv, Rgb, hsv2rgb},
    math8::beatsin8,
    throttle::Throttle,
};

const BEATS_PER_MINUTE: u16 = 26;
const HUE_PERIOD_MS: u64 = 20;
const HUE_PER_LED: u8 = 2;
const VALUE_PER_LED: u8 = 10;

#[derive(Debug, Clone)]
pub struct BpmEffect {
    hue: u8,
    drift: Throttle,
}

impl Default for BpmEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl BpmEffect {
    pub const fn new() -> Self {
        Self {
            hue: 0,
            drift: Throttle::from_millis(HUE_PERIOD_MS),
        }
    }
}

impl Effect for BpmEffect {
    fn enter(&mut self, _ctx: &FrameContext<'_>, _base: &mut [Rgb]) {
        self.hue = 0;
        self.drift.reset();
    }

    fn update(&mut self, ctx: &FrameContext<'_>, base: &mut [Rgb]) -> Progress {
        if self.drift.ready(ctx.now) {
            self.hue = self.hue.wrapping_add(1);
        }

        let beat = beatsin8(BEATS_PER_MINUTE, 64, 255, ctx.elapsed);
        let mut hue = self.hue;
        let mut val = beat.wrapping_sub(self.hue);
        for led in base.iter_mut() {
            *led = hsv2rgb(Hsv { hue, sat: 255, val });
            hue = hue.wrapping_add(HUE_PER_LED);
            val = val.wrapping_add(VALUE_PER_LED);
        }

        Progress::Running
    }
}
