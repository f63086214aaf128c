//! Effects supplied by the application

use super::{Effect, FrameContext, Progress};
use crate::color::Rgb;

/// Render callback of a custom effect
pub type CustomRender = fn(&FrameContext<'_>, &mut [Rgb]) -> Progress;

/// Stateless effect backed by a plain function
///
/// Two custom effects are considered equal when their names match.
#[derive(Clone, Copy)]
pub struct CustomEffect {
    name: &'static str,
    render: CustomRender,
}

impl CustomEffect {
    pub const fn new(name: &'static str, render: CustomRender) -> Self {
        Self { name, render }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl core::fmt::Debug for CustomEffect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CustomEffect")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl PartialEq for CustomEffect {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for CustomEffect {}

impl Effect for CustomEffect {
    fn update(&mut self, ctx: &FrameContext<'_>, base: &mut [Rgb]) -> Progress {
        (self.render)(ctx, base)
    }
}
