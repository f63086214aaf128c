//! A colored dot sweeping back and forth, with fading trails

use super::{Effect, FrameContext, Progress};
use crate::{
    color::{Rgb, fade_to_black_by, hue_wheel, saturating_max},
    math8::beatsin16,
    throttle::Throttle,
};

const SWEEP_BPM: u16 = 13;
const TRAIL_FADE: u8 = 4;
const TRAIL_PERIOD_MS: u64 = 10;
const HUE_PERIOD_MS: u64 = 20;

#[derive(Debug, Clone)]
pub struct SinelonEffect {
    hue: u8,
    trail: Throttle,
    drift: Throttle,
}

impl Default for SinelonEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl SinelonEffect {
    pub const fn new() -> Self {
        Self {
            hue: 0,
            trail: Throttle::from_millis(TRAIL_PERIOD_MS),
            drift: Throttle::from_millis(HUE_PERIOD_MS),
        }
    }
}

impl Effect for SinelonEffect {
    fn enter(&mut self, _ctx: &FrameContext<'_>, _base: &mut [Rgb]) {
        self.hue = 0;
        self.trail.reset();
        self.drift.reset();
    }

    fn update(&mut self, ctx: &FrameContext<'_>, base: &mut [Rgb]) -> Progress {
        if base.is_empty() {
            return Progress::Running;
        }
        if self.trail.ready(ctx.now) {
            fade_to_black_by(base, TRAIL_FADE);
        }
        if self.drift.ready(ctx.now) {
            self.hue = self.hue.wrapping_add(1);
        }

        let span = u16::try_from(base.len()).unwrap_or(u16::MAX);
        let pos = usize::from(beatsin16(SWEEP_BPM, 0, span, ctx.elapsed, 0));
        let pos = pos.min(base.len() - 1);
        base[pos] = saturating_max(base[pos], hue_wheel(self.hue));

        Progress::Running
    }
}
