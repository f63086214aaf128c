//! Effect scheduler
//!
//! Owns the preset list and decides which effect drives the base buffer:
//! either the current preset or, with priority, an override. Tracks how long
//! the running effect has been active and whether it is done.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    canvas::Canvas,
    effect::{EffectId, Progress},
    error::ConfigError,
    fsm::EffectMachine,
    presence::Presence,
    preset::{Preset, PresetList},
    style::Style,
};

const OVERRIDE_ID_NONE: u8 = 0;
const OVERRIDE_ID_ALL_BLACK: u8 = 1;
const OVERRIDE_ID_ALL_WHITE: u8 = 2;
const OVERRIDE_ID_DISTANCE_TEST: u8 = 3;
const OVERRIDE_ID_TEST_PATTERN: u8 = 4;
const OVERRIDE_ID_SLEEP_AWAITING_PRESENCE: u8 = 5;

/// Priority state bypassing the preset list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Override {
    #[default]
    None = OVERRIDE_ID_NONE,
    /// Fade everything to black
    AllBlack = OVERRIDE_ID_ALL_BLACK,
    /// Fade everything to white
    AllWhite = OVERRIDE_ID_ALL_WHITE,
    /// Show the presence sensor reading
    DistanceTest = OVERRIDE_ID_DISTANCE_TEST,
    /// Show the segmentation of the active style
    TestPattern = OVERRIDE_ID_TEST_PATTERN,
    /// Stay dark until an audience shows up
    SleepAwaitingPresence = OVERRIDE_ID_SLEEP_AWAITING_PRESENCE,
}

impl Override {
    /// Unknown values map to [`Override::None`]
    pub const fn from_raw(value: u8) -> Self {
        match value {
            OVERRIDE_ID_ALL_BLACK => Self::AllBlack,
            OVERRIDE_ID_ALL_WHITE => Self::AllWhite,
            OVERRIDE_ID_DISTANCE_TEST => Self::DistanceTest,
            OVERRIDE_ID_TEST_PATTERN => Self::TestPattern,
            OVERRIDE_ID_SLEEP_AWAITING_PRESENCE => Self::SleepAwaitingPresence,
            _ => Self::None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::AllBlack => "all_black",
            Self::AllWhite => "all_white",
            Self::DistanceTest => "distance_test",
            Self::TestPattern => "test_pattern",
            Self::SleepAwaitingPresence => "sleep_awaiting_presence",
        }
    }

    pub const fn is_active(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Effect bound to the override
    pub const fn effect(self) -> Option<EffectId> {
        match self {
            Self::None => None,
            Self::AllBlack => Some(EffectId::FadeToBlack),
            Self::AllWhite => Some(EffectId::FadeToWhite),
            Self::DistanceTest => Some(EffectId::DistanceTest),
            Self::TestPattern => Some(EffectId::TestPattern),
            Self::SleepAwaitingPresence => Some(EffectId::Sleep),
        }
    }
}

/// Edge-triggered change marker, cleared by the first reader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChangeFlag {
    #[default]
    Idle,
    Raised,
}

impl ChangeFlag {
    pub fn raise(&mut self) {
        *self = Self::Raised;
    }

    /// Return whether the flag was raised and clear it
    pub fn take(&mut self) -> bool {
        core::mem::take(self) == Self::Raised
    }
}

/// Chooses and times the effect owning the base buffer
#[derive(Debug, Clone)]
pub struct EffectScheduler<const MAX_PRESETS: usize> {
    presets: PresetList<MAX_PRESETS>,
    index: usize,
    override_mode: Override,
    style: Style,
    duration: Duration,
    machine: EffectMachine,
    changed: ChangeFlag,
    finished: bool,
}

impl<const MAX_PRESETS: usize> EffectScheduler<MAX_PRESETS> {
    /// Create a scheduler starting at the first preset
    pub fn new(presets: &[Preset]) -> Result<Self, ConfigError> {
        let presets = PresetList::new(presets)?;
        let (_, first) = presets.clamped(0);
        let first = *first;

        let mut changed = ChangeFlag::default();
        changed.raise();

        Ok(Self {
            presets,
            index: 0,
            override_mode: Override::None,
            style: first.style,
            duration: first.duration,
            machine: EffectMachine::new(first.effect.to_slot()),
            changed,
            finished: false,
        })
    }

    /// Replace the preset list and restart the current index on it
    pub fn set_presets(&mut self, presets: &[Preset]) -> Result<(), ConfigError> {
        self.presets = PresetList::new(presets)?;
        self.set_preset(self.index);
        Ok(())
    }

    /// Run preset `index` (clamped), clearing any override
    pub fn set_preset(&mut self, index: usize) {
        let (index, preset) = self.presets.clamped(index);
        let preset = *preset;

        self.index = index;
        self.override_mode = Override::None;
        self.style = preset.style;
        self.duration = preset.duration;
        self.machine.transition_to(preset.effect.to_slot());
        self.finished = false;
        self.changed.raise();

        #[cfg(feature = "esp32-log")]
        println!(
            "[scheduler] preset {}: {} ({})",
            index,
            preset.effect.as_str(),
            preset.style.as_str()
        );
    }

    pub fn next_preset(&mut self) {
        self.set_preset((self.index + 1) % self.presets.count());
    }

    pub fn prev_preset(&mut self) {
        let count = self.presets.count();
        self.set_preset((self.index + count - 1) % count);
    }

    /// Activate an override, [`Override::None`] resumes the current preset
    ///
    /// Overrides run until told otherwise and show on the full strip, except
    /// the test pattern which keeps the active style.
    pub fn set_override(&mut self, mode: Override) {
        let Some(effect) = mode.effect() else {
            self.set_preset(self.index);
            return;
        };

        if mode != Override::TestPattern {
            self.style = Style::FullStrip;
        } else if self.override_mode.is_active() && self.override_mode != Override::TestPattern {
            // Another override forced the full strip, fall back to the preset style
            self.style = self.presets.clamped(self.index).1.style;
        }
        self.override_mode = mode;
        self.duration = Duration::from_ticks(0);
        self.machine.transition_to(effect.to_slot());
        self.finished = false;
        self.changed.raise();

        #[cfg(feature = "esp32-log")]
        println!("[scheduler] override: {}", mode.as_str());
    }

    /// Activate `mode`, or resume the current preset if it is already active
    ///
    /// Returns whether an override is active afterwards.
    pub fn toggle_override(&mut self, mode: Override) -> bool {
        if self.override_mode == mode {
            self.set_override(Override::None);
        } else {
            self.set_override(mode);
        }
        self.override_mode.is_active()
    }

    /// Switch the running effect to the next style
    pub fn next_style(&mut self) -> Style {
        self.style = self.style.next();
        #[cfg(feature = "esp32-log")]
        println!("[scheduler] style: {}", self.style.as_str());
        self.style
    }

    /// Switch the running effect to the previous style
    pub fn prev_style(&mut self) -> Style {
        self.style = self.style.prev();
        #[cfg(feature = "esp32-log")]
        println!("[scheduler] style: {}", self.style.as_str());
        self.style
    }

    /// Render one frame of the running effect into the canvas base
    pub fn update<const MAX_LEDS: usize>(
        &mut self,
        now: Instant,
        presence: Presence,
        canvas: &mut Canvas<MAX_LEDS>,
    ) -> Progress {
        let progress = self.machine.update(now, presence, self.style, canvas);

        self.finished = if self.duration.as_ticks() > 0 {
            self.machine.time_in_state(now) >= self.duration
        } else {
            progress.is_about_to_finish()
        };

        progress
    }

    /// Whether the running effect is done, as of the last update
    pub const fn has_finished(&self) -> bool {
        self.finished
    }

    /// Return whether the effect changed since the last call, and reset
    pub fn fx_has_changed(&mut self) -> bool {
        self.changed.take()
    }

    pub const fn preset_index(&self) -> usize {
        self.index
    }

    pub const fn override_mode(&self) -> Override {
        self.override_mode
    }

    /// Style the running effect is shown with
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Run time of the active effect, zero when it runs until finished
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    pub fn effect_id(&self) -> EffectId {
        self.machine.effect_id()
    }

    pub fn time_in_effect(&self, now: Instant) -> Duration {
        self.machine.time_in_state(now)
    }

    pub const fn presets(&self) -> &PresetList<MAX_PRESETS> {
        &self.presets
    }
}
