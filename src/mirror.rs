//! Mirror orchestrator
//!
//! Ties the command queue, the scheduler, the presence policy and the
//! canvas together. One [`Mirror::tick`] drains commands, lets the running
//! effect fill the base buffer, applies the sleep/wake policy and segments
//! the base onto the full loop, always in that order.

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::command::{CommandProcessor, CommandReceiver};
use crate::error::{ConfigError, SegmentError};
use crate::geometry::Geometry;
use crate::presence::{AudienceWatch, Presence, PresenceConfig, WatchAction};
use crate::preset::Preset;
use crate::scheduler::EffectScheduler;

/// Startup configuration of the mirror
#[derive(Debug, Clone, Copy)]
pub struct MirrorConfig<'p> {
    /// LEDs per side (`L`)
    pub side: usize,
    /// Cycling list, must not be empty
    pub presets: &'p [Preset],
    pub presence: PresenceConfig,
    /// Advance to the next preset when the current one finishes
    pub auto_advance: bool,
}

impl<'p> MirrorConfig<'p> {
    pub fn new(side: usize, presets: &'p [Preset]) -> Self {
        Self {
            side,
            presets,
            presence: PresenceConfig::default(),
            auto_advance: true,
        }
    }

    #[must_use]
    pub fn with_presence(mut self, presence: PresenceConfig) -> Self {
        self.presence = presence;
        self
    }

    #[must_use]
    pub fn with_auto_advance(mut self, enabled: bool) -> Self {
        self.auto_advance = enabled;
        self
    }
}

/// Infinity mirror engine
pub struct Mirror<'a, const MAX_LEDS: usize, const MAX_PRESETS: usize, const COMMANDS: usize> {
    commands: CommandProcessor<'a, COMMANDS>,
    scheduler: EffectScheduler<MAX_PRESETS>,
    watch: AudienceWatch,
    canvas: Canvas<MAX_LEDS>,
    presence: Presence,
    last_action: Option<WatchAction>,
}

impl<'a, const MAX_LEDS: usize, const MAX_PRESETS: usize, const COMMANDS: usize>
    Mirror<'a, MAX_LEDS, MAX_PRESETS, COMMANDS>
{
    /// Validate the configuration and build the mirror
    ///
    /// Nothing is rendered until the first tick.
    pub fn new(
        commands: CommandReceiver<'a, COMMANDS>,
        config: &MirrorConfig<'_>,
    ) -> Result<Self, ConfigError> {
        let geometry = Geometry::new(config.side, MAX_LEDS)?;
        config.presence.validate()?;
        let scheduler = EffectScheduler::new(config.presets)?;

        Ok(Self {
            commands: CommandProcessor::new(commands),
            scheduler,
            watch: AudienceWatch::new(config.presence, config.auto_advance),
            canvas: Canvas::with_geometry(geometry),
            presence: Presence::default(),
            last_action: None,
        })
    }

    /// Process one frame
    ///
    /// `distance_cm` is the latest smoothed presence sensor reading.
    pub fn tick(&mut self, now: Instant, distance_cm: u16) -> Result<&[Rgb], SegmentError> {
        self.commands.process_pending(&mut self.scheduler, &mut self.watch);

        self.presence = self.watch.config().reading(distance_cm);
        self.scheduler.update(now, self.presence, &mut self.canvas);

        self.last_action = self.watch.apply(now, self.presence, &mut self.scheduler);

        #[cfg(feature = "esp32-log")]
        if let Some(action) = self.last_action {
            println!("[mirror] {:?} at {} cm", action, self.presence.distance_cm);
        }

        self.canvas.render()
    }

    pub const fn geometry(&self) -> Geometry {
        self.canvas.geometry()
    }

    pub const fn scheduler(&self) -> &EffectScheduler<MAX_PRESETS> {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut EffectScheduler<MAX_PRESETS> {
        &mut self.scheduler
    }

    pub const fn watch(&self) -> &AudienceWatch {
        &self.watch
    }

    pub fn watch_mut(&mut self) -> &mut AudienceWatch {
        &mut self.watch
    }

    pub const fn canvas(&self) -> &Canvas<MAX_LEDS> {
        &self.canvas
    }

    /// Presence reading of the last tick
    pub const fn presence(&self) -> Presence {
        self.presence
    }

    /// Policy decision taken during the last tick
    pub const fn last_action(&self) -> Option<WatchAction> {
        self.last_action
    }

    /// Frame produced by the last tick
    pub fn output(&self) -> &[Rgb] {
        self.canvas.output()
    }
}
