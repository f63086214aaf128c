//! Frame pacing
//!
//! Portable frame timing without async or platform timers. The caller owns
//! the sleeping: every tick returns how long to wait before the next one.

use embassy_time::{Duration, Instant};

use crate::{
    OutputDriver,
    color::{BLACK, Rgb},
    error::SegmentError,
    mirror::Mirror,
};

/// Default target frame rate
pub const DEFAULT_FPS: u64 = 100;

/// Default frame duration based on target FPS
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS);

/// Time the LED driver gets to settle before the first real frame
pub const DEFAULT_STARTUP_DELAY: Duration = Duration::from_millis(3_000);

/// Result of a frame tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameResult {
    /// The deadline for the next frame
    pub next_deadline: Instant,
    /// How long to wait until the next frame (zero if behind schedule)
    pub sleep_duration: Duration,
}

/// Drives a [`Mirror`] at a fixed frame rate and pushes frames to the output
///
/// During the startup delay the output is held black and the mirror is not
/// ticked.
///
/// ```ignore
/// let mut pacer = FramePacer::new(mirror, driver);
///
/// loop {
///     let result = pacer.tick(Instant::now(), sensor.distance_cm())?;
///     Timer::after(result.sleep_duration).await;
/// }
/// ```
pub struct FramePacer<
    'a,
    O: OutputDriver,
    const MAX_LEDS: usize,
    const MAX_PRESETS: usize,
    const COMMANDS: usize,
> {
    output: O,
    mirror: Mirror<'a, MAX_LEDS, MAX_PRESETS, COMMANDS>,
    frame_duration: Duration,
    startup_delay: Duration,
    started_at: Option<Instant>,
    next_frame: Instant,
}

impl<'a, O: OutputDriver, const MAX_LEDS: usize, const MAX_PRESETS: usize, const COMMANDS: usize>
    FramePacer<'a, O, MAX_LEDS, MAX_PRESETS, COMMANDS>
{
    pub fn new(mirror: Mirror<'a, MAX_LEDS, MAX_PRESETS, COMMANDS>, output: O) -> Self {
        Self {
            output,
            mirror,
            frame_duration: DEFAULT_FRAME_DURATION,
            startup_delay: DEFAULT_STARTUP_DELAY,
            started_at: None,
            next_frame: Instant::from_ticks(0),
        }
    }

    #[must_use]
    pub fn with_frame_duration(mut self, frame_duration: Duration) -> Self {
        self.frame_duration = frame_duration;
        self
    }

    #[must_use]
    pub fn with_startup_delay(mut self, startup_delay: Duration) -> Self {
        self.startup_delay = startup_delay;
        self
    }

    /// Render and output one frame, then compute the next deadline
    pub fn tick(&mut self, now: Instant, distance_cm: u16) -> Result<FrameResult, SegmentError> {
        let started_at = *self.started_at.get_or_insert(now);

        // Skip the backlog after a stall instead of bursting to catch up
        let max_drift = self.frame_duration * 2;
        if now.saturating_duration_since(self.next_frame) > max_drift {
            self.next_frame = now;
        }

        if now.saturating_duration_since(started_at) < self.startup_delay {
            let blank = [BLACK; MAX_LEDS];
            let leds = self.mirror.geometry().led_count();
            self.output.write(&blank[..leds]);
        } else {
            let frame = self.mirror.tick(now, distance_cm)?;
            self.output.write(frame);
        }

        self.next_frame += self.frame_duration;

        Ok(FrameResult {
            next_deadline: self.next_frame,
            sleep_duration: self.next_frame.saturating_duration_since(now),
        })
    }

    /// Whether the startup delay is over
    pub fn is_running(&self, now: Instant) -> bool {
        self.started_at.is_some_and(|started_at| {
            now.saturating_duration_since(started_at) >= self.startup_delay
        })
    }

    pub const fn mirror(&self) -> &Mirror<'a, MAX_LEDS, MAX_PRESETS, COMMANDS> {
        &self.mirror
    }

    pub fn mirror_mut(&mut self) -> &mut Mirror<'a, MAX_LEDS, MAX_PRESETS, COMMANDS> {
        &mut self.mirror
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    /// Frame produced by the mirror's last tick
    ///
    /// The mirror is not ticked during the startup delay, so this stays black
    /// until then, matching what was written to the output.
    pub fn frame(&self) -> &[Rgb] {
        self.mirror.output()
    }
}
