//! Sleep until an audience shows up
//!
//! Fades out whatever is on the mirror, then stays dark. Finishes as soon as
//! the presence reading reports an audience.

use super::{Effect, FadeEffect, FrameContext, Progress};
use crate::color::{BLACK, Rgb};

#[derive(Debug, Clone)]
pub struct SleepEffect {
    fade: FadeEffect,
}

impl Default for SleepEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl SleepEffect {
    pub const fn new() -> Self {
        Self {
            fade: FadeEffect::new(BLACK),
        }
    }
}

impl Effect for SleepEffect {
    fn enter(&mut self, ctx: &FrameContext<'_>, base: &mut [Rgb]) {
        self.fade.enter(ctx, base);
    }

    fn update(&mut self, ctx: &FrameContext<'_>, base: &mut [Rgb]) -> Progress {
        self.fade.update(ctx, base);

        if ctx.presence.present {
            Progress::AboutToFinish
        } else {
            Progress::Running
        }
    }
}
