//! Static pattern revealing the active segmentation
//!
//! First pixel green, last pixel red, alternating yellow and blue in
//! between.

use super::{Effect, FrameContext, Progress};
use crate::color::{BLUE, GREEN, RED, Rgb, YELLOW};

#[derive(Debug, Clone, Copy, Default)]
pub struct TestPatternEffect;

impl Effect for TestPatternEffect {
    fn update(&mut self, _ctx: &FrameContext<'_>, base: &mut [Rgb]) -> Progress {
        for (idx, led) in base.iter_mut().enumerate() {
            *led = if idx % 2 == 1 { BLUE } else { YELLOW };
        }
        if let Some(first) = base.first_mut() {
            *first = GREEN;
        }
        if let Some(last) = base.last_mut() {
            *last = RED;
        }

        Progress::Running
    }
}
