//! Fade to a solid color
//!
//! Starts from whatever is currently shown on the mirror and moves every
//! pixel toward the target color in small steps.

use super::{Effect, FrameContext, Progress};
use crate::{
    color::{Rgb, fade_toward_color, is_all_of_color},
    throttle::Throttle,
};

const FADE_PERIOD_MS: u64 = 10;
const FADE_AMOUNT: u8 = 16;

/// Fades the base buffer toward a target color
///
/// Reports [`Progress::AboutToFinish`] once every base pixel equals the
/// target.
#[derive(Debug, Clone)]
pub struct FadeEffect {
    target: Rgb,
    throttle: Throttle,
}

impl FadeEffect {
    pub const fn new(target: Rgb) -> Self {
        Self {
            target,
            throttle: Throttle::from_millis(FADE_PERIOD_MS),
        }
    }
}

impl Effect for FadeEffect {
    fn enter(&mut self, ctx: &FrameContext<'_>, base: &mut [Rgb]) {
        let shared = base.len().min(ctx.previous.len());
        base[..shared].copy_from_slice(&ctx.previous[..shared]);
        self.throttle.reset();
        self.throttle.ready(ctx.now);
    }

    fn update(&mut self, ctx: &FrameContext<'_>, base: &mut [Rgb]) -> Progress {
        if self.throttle.ready(ctx.now) {
            fade_toward_color(base, self.target, FADE_AMOUNT);
        }

        if is_all_of_color(base, self.target) {
            Progress::AboutToFinish
        } else {
            Progress::Running
        }
    }
}
