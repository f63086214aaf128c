//! Rainbow cycling effect

use super::{Effect, FrameContext, Progress};
use crate::{
    color::{Rgb, fill_rainbow},
    throttle::Throttle,
};

const HUE_PERIOD_MS: u64 = 20;
const HUE_STEP: u8 = 1;

/// Full rainbow stretched over the base buffer, drifting along the hue wheel
#[derive(Debug, Clone)]
pub struct RainbowEffect {
    hue: u8,
    drift: Throttle,
}

impl Default for RainbowEffect {
    fn default() -> Self {
        Self {
            hue: 0,
            drift: Throttle::from_millis(HUE_PERIOD_MS),
        }
    }
}

impl Effect for RainbowEffect {
    fn enter(&mut self, _ctx: &FrameContext<'_>, _base: &mut [Rgb]) {
        self.hue = 0;
        self.drift.reset();
    }

    fn update(&mut self, ctx: &FrameContext<'_>, base: &mut [Rgb]) -> Progress {
        if self.drift.ready(ctx.now) {
            self.hue = self.hue.wrapping_add(HUE_STEP);
        }

        #[allow(clippy::cast_possible_truncation)]
        let spread = (255 / base.len().saturating_sub(1).max(1)) as u8;
        fill_rainbow(base, self.hue, spread);

        Progress::Running
    }
}
