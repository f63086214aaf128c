//! Eight colored dots, weaving in and out of sync with each other

use super::{Effect, FrameContext, Progress};
use crate::{
    color::{Hsv, Rgb, fade_to_black_by, hsv2rgb, saturating_max},
    math8::beatsin16,
    throttle::Throttle,
};

const DOTS: u16 = 8;
const SLOWEST_BPM: u16 = 7;
const DOT_HUE_STEP: u8 = 32;
const TRAIL_FADE: u8 = 20;
const TRAIL_PERIOD_MS: u64 = 10;

#[derive(Debug, Clone)]
pub struct JuggleEffect {
    trail: Throttle,
}

impl Default for JuggleEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl JuggleEffect {
    pub const fn new() -> Self {
        Self {
            trail: Throttle::from_millis(TRAIL_PERIOD_MS),
        }
    }
}

impl Effect for JuggleEffect {
    fn enter(&mut self, _ctx: &FrameContext<'_>, _base: &mut [Rgb]) {
        self.trail.reset();
    }

    fn update(&mut self, ctx: &FrameContext<'_>, base: &mut [Rgb]) -> Progress {
        if base.is_empty() {
            return Progress::Running;
        }
        if self.trail.ready(ctx.now) {
            fade_to_black_by(base, TRAIL_FADE);
        }

        let span = u16::try_from(base.len()).unwrap_or(u16::MAX);
        let last = base.len() - 1;
        let mut hue = 0u8;
        for dot in 0..DOTS {
            let pos = usize::from(beatsin16(SLOWEST_BPM + dot, 0, span, ctx.elapsed, 0));
            let pos = pos.min(last);
            let color = hsv2rgb(Hsv {
                hue,
                sat: 200,
                val: 255,
            });
            base[pos] = saturating_max(base[pos], color);
            hue = hue.wrapping_add(DOT_HUE_STEP);
        }

        Progress::Running
    }
}
