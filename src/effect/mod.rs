//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait and owns its animation state;
//! everything shared between ticks is passed in through [`FrameContext`].

mod bpm;
mod custom;
mod fade;
mod juggle;
mod rainbow;
mod sinelon;
mod sleep;
mod test_pattern;

use embassy_time::{Duration, Instant};

pub use bpm::BpmEffect;
pub use custom::{CustomEffect, CustomRender};
pub use distance_test::DistanceTestEffect;
pub use fade::FadeEffect;
pub use juggle::JuggleEffect;
pub use rainbow::RainbowEffect;
pub use sinelon::SinelonEffect;
pub use sleep::SleepEffect;
pub use test_pattern::TestPatternEffect;

use crate::{
    color::{BLACK, RED, Rgb, WHITE},
    presence::Presence,
};

const EFFECT_NAME_FADE_TO_BLACK: &str = "fade_to_black";
const EFFECT_NAME_FADE_TO_WHITE: &str = "fade_to_white";
const EFFECT_NAME_FADE_TO_RED: &str = "fade_to_red";
const EFFECT_NAME_RAINBOW: &str = "rainbow";
const EFFECT_NAME_SINELON: &str = "sinelon";
const EFFECT_NAME_BPM: &str = "bpm";
const EFFECT_NAME_JUGGLE: &str = "juggle";
const EFFECT_NAME_TEST_PATTERN: &str = "test_pattern";
const EFFECT_NAME_DISTANCE_TEST: &str = "distance_test";
const EFFECT_NAME_SLEEP: &str = "sleep";

const EFFECT_ID_FADE_TO_BLACK: u8 = 0;
const EFFECT_ID_FADE_TO_WHITE: u8 = 1;
const EFFECT_ID_FADE_TO_RED: u8 = 2;
const EFFECT_ID_RAINBOW: u8 = 3;
const EFFECT_ID_SINELON: u8 = 4;
const EFFECT_ID_BPM: u8 = 5;
const EFFECT_ID_JUGGLE: u8 = 6;
const EFFECT_ID_TEST_PATTERN: u8 = 7;
const EFFECT_ID_DISTANCE_TEST: u8 = 8;
const EFFECT_ID_SLEEP: u8 = 9;

/// Per-tick input shared with the running effect
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    /// Current time
    pub now: Instant,
    /// Time since the effect was entered
    pub elapsed: Duration,
    /// Latest smoothed presence reading
    pub presence: Presence,
    /// Last full output frame, as currently shown on the mirror
    pub previous: &'a [Rgb],
}

/// Completion signal reported by an effect on every update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Progress {
    /// Effect wants to keep running
    #[default]
    Running,
    /// Effect reached its natural end (faded out, audience detected, ...)
    AboutToFinish,
}

impl Progress {
    pub const fn is_about_to_finish(self) -> bool {
        matches!(self, Self::AboutToFinish)
    }
}

pub trait Effect {
    /// Called once when the effect becomes active
    ///
    /// `base` has just been cleared to black and already has the length
    /// required by the active style.
    fn enter(&mut self, _ctx: &FrameContext<'_>, _base: &mut [Rgb]) {}

    /// Render a single base frame
    fn update(&mut self, ctx: &FrameContext<'_>, base: &mut [Rgb]) -> Progress;

    /// Called once when another effect takes over
    fn exit(&mut self, _ctx: &FrameContext<'_>) {}
}

/// Known effect ids that can be put into a preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectId {
    FadeToBlack,
    FadeToWhite,
    FadeToRed,
    Rainbow,
    Sinelon,
    Bpm,
    Juggle,
    TestPattern,
    DistanceTest,
    Sleep,
    /// Effect supplied by the application
    Custom(CustomEffect),
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    FadeToBlack(FadeEffect),
    FadeToWhite(FadeEffect),
    FadeToRed(FadeEffect),
    Rainbow(RainbowEffect),
    Sinelon(SinelonEffect),
    Bpm(BpmEffect),
    Juggle(JuggleEffect),
    TestPattern(TestPatternEffect),
    DistanceTest(DistanceTestEffect),
    Sleep(SleepEffect),
    Custom(CustomEffect),
}

impl Default for EffectSlot {
    fn default() -> Self {
        Self::FadeToBlack(FadeEffect::new(BLACK))
    }
}

impl EffectId {
    /// Resolve a built-in effect by its numeric id
    ///
    /// Custom effects have no numeric id.
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_FADE_TO_BLACK => Self::FadeToBlack,
            EFFECT_ID_FADE_TO_WHITE => Self::FadeToWhite,
            EFFECT_ID_FADE_TO_RED => Self::FadeToRed,
            EFFECT_ID_RAINBOW => Self::Rainbow,
            EFFECT_ID_SINELON => Self::Sinelon,
            EFFECT_ID_BPM => Self::Bpm,
            EFFECT_ID_JUGGLE => Self::Juggle,
            EFFECT_ID_TEST_PATTERN => Self::TestPattern,
            EFFECT_ID_DISTANCE_TEST => Self::DistanceTest,
            EFFECT_ID_SLEEP => Self::Sleep,
            _ => return None,
        })
    }

    pub fn to_slot(self) -> EffectSlot {
        match self {
            Self::FadeToBlack => EffectSlot::FadeToBlack(FadeEffect::new(BLACK)),
            Self::FadeToWhite => EffectSlot::FadeToWhite(FadeEffect::new(WHITE)),
            Self::FadeToRed => EffectSlot::FadeToRed(FadeEffect::new(RED)),
            Self::Rainbow => EffectSlot::Rainbow(RainbowEffect::default()),
            Self::Sinelon => EffectSlot::Sinelon(SinelonEffect::new()),
            Self::Bpm => EffectSlot::Bpm(BpmEffect::new()),
            Self::Juggle => EffectSlot::Juggle(JuggleEffect::new()),
            Self::TestPattern => EffectSlot::TestPattern(TestPatternEffect),
            Self::DistanceTest => EffectSlot::DistanceTest(DistanceTestEffect),
            Self::Sleep => EffectSlot::Sleep(SleepEffect::new()),
            Self::Custom(effect) => EffectSlot::Custom(effect),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FadeToBlack => EFFECT_NAME_FADE_TO_BLACK,
            Self::FadeToWhite => EFFECT_NAME_FADE_TO_WHITE,
            Self::FadeToRed => EFFECT_NAME_FADE_TO_RED,
            Self::Rainbow => EFFECT_NAME_RAINBOW,
            Self::Sinelon => EFFECT_NAME_SINELON,
            Self::Bpm => EFFECT_NAME_BPM,
            Self::Juggle => EFFECT_NAME_JUGGLE,
            Self::TestPattern => EFFECT_NAME_TEST_PATTERN,
            Self::DistanceTest => EFFECT_NAME_DISTANCE_TEST,
            Self::Sleep => EFFECT_NAME_SLEEP,
            Self::Custom(effect) => effect.name(),
        }
    }

    /// Parse a built-in effect name
    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_FADE_TO_BLACK => Some(Self::FadeToBlack),
            EFFECT_NAME_FADE_TO_WHITE => Some(Self::FadeToWhite),
            EFFECT_NAME_FADE_TO_RED => Some(Self::FadeToRed),
            EFFECT_NAME_RAINBOW => Some(Self::Rainbow),
            EFFECT_NAME_SINELON => Some(Self::Sinelon),
            EFFECT_NAME_BPM => Some(Self::Bpm),
            EFFECT_NAME_JUGGLE => Some(Self::Juggle),
            EFFECT_NAME_TEST_PATTERN => Some(Self::TestPattern),
            EFFECT_NAME_DISTANCE_TEST => Some(Self::DistanceTest),
            EFFECT_NAME_SLEEP => Some(Self::Sleep),
            _ => None,
        }
    }
}

impl EffectSlot {
    /// Enter the current effect
    pub fn enter(&mut self, ctx: &FrameContext<'_>, base: &mut [Rgb]) {
        match self {
            Self::FadeToBlack(effect) | Self::FadeToWhite(effect) | Self::FadeToRed(effect) => {
                effect.enter(ctx, base);
            }
            Self::Rainbow(effect) => effect.enter(ctx, base),
            Self::Sinelon(effect) => effect.enter(ctx, base),
            Self::Bpm(effect) => effect.enter(ctx, base),
            Self::Juggle(effect) => effect.enter(ctx, base),
            Self::TestPattern(effect) => effect.enter(ctx, base),
            Self::DistanceTest(effect) => effect.enter(ctx, base),
            Self::Sleep(effect) => effect.enter(ctx, base),
            Self::Custom(effect) => effect.enter(ctx, base),
        }
    }

    /// Render the current effect
    pub fn update(&mut self, ctx: &FrameContext<'_>, base: &mut [Rgb]) -> Progress {
        match self {
            Self::FadeToBlack(effect) | Self::FadeToWhite(effect) | Self::FadeToRed(effect) => {
                effect.update(ctx, base)
            }
            Self::Rainbow(effect) => effect.update(ctx, base),
            Self::Sinelon(effect) => effect.update(ctx, base),
            Self::Bpm(effect) => effect.update(ctx, base),
            Self::Juggle(effect) => effect.update(ctx, base),
            Self::TestPattern(effect) => effect.update(ctx, base),
            Self::DistanceTest(effect) => effect.update(ctx, base),
            Self::Sleep(effect) => effect.update(ctx, base),
            Self::Custom(effect) => effect.update(ctx, base),
        }
    }

    /// Exit the current effect
    pub fn exit(&mut self, ctx: &FrameContext<'_>) {
        match self {
            Self::FadeToBlack(effect) | Self::FadeToWhite(effect) | Self::FadeToRed(effect) => {
                effect.exit(ctx);
            }
            Self::Rainbow(effect) => effect.exit(ctx),
            Self::Sinelon(effect) => effect.exit(ctx),
            Self::Bpm(effect) => effect.exit(ctx),
            Self::Juggle(effect) => effect.exit(ctx),
            Self::TestPattern(effect) => effect.exit(ctx),
            Self::DistanceTest(effect) => effect.exit(ctx),
            Self::Sleep(effect) => effect.exit(ctx),
            Self::Custom(effect) => effect.exit(ctx),
        }
    }

    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::FadeToBlack(_) => EffectId::FadeToBlack,
            Self::FadeToWhite(_) => EffectId::FadeToWhite,
            Self::FadeToRed(_) => EffectId::FadeToRed,
            Self::Rainbow(_) => EffectId::Rainbow,
            Self::Sinelon(_) => EffectId::Sinelon,
            Self::Bpm(_) => EffectId::Bpm,
            Self::Juggle(_) => EffectId::Juggle,
            Self::TestPattern(_) => EffectId::TestPattern,
            Self::DistanceTest(_) => EffectId::DistanceTest,
            Self::Sleep(_) => EffectId::Sleep,
            Self::Custom(effect) => EffectId::Custom(*effect),
        }
    }

    pub fn name(&self) -> &'static str {
        self.id().as_str()
    }
}
