//! Effect state machine
//!
//! Holds the running effect and applies transitions. A transition requested
//! with [`EffectMachine::transition_to`] takes effect at the start of the
//! next [`EffectMachine::update`]: the old effect exits, the canvas adopts
//! the new style (discarding the base pattern), the new effect enters and
//! the elapsed time origin is reset to that tick.
//!
//! The machine knows nothing about timeouts, those are decided by the
//! scheduler.

use embassy_time::{Duration, Instant};

use crate::{
    canvas::Canvas,
    effect::{EffectId, EffectSlot, FrameContext, Progress},
    presence::Presence,
    style::Style,
};

#[derive(Debug, Clone)]
pub struct EffectMachine {
    current: EffectSlot,
    pending: Option<EffectSlot>,
    entered_at: Option<Instant>,
}

impl EffectMachine {
    /// Create a machine that enters `initial` on its first update
    pub fn new(initial: EffectSlot) -> Self {
        Self {
            current: EffectSlot::default(),
            pending: Some(initial),
            entered_at: None,
        }
    }

    /// Schedule a transition for the next update
    ///
    /// A later request before that update replaces the earlier one.
    pub fn transition_to(&mut self, next: EffectSlot) {
        self.pending = Some(next);
    }

    pub const fn is_transition_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Effect that is running, or about to run if a transition is pending
    pub fn effect_id(&self) -> EffectId {
        self.pending.as_ref().unwrap_or(&self.current).id()
    }

    /// Time since the running effect was entered
    ///
    /// Zero while a transition is pending.
    pub fn time_in_state(&self, now: Instant) -> Duration {
        match self.entered_at {
            Some(entered_at) if !self.is_transition_pending() => {
                now.saturating_duration_since(entered_at)
            }
            _ => Duration::from_ticks(0),
        }
    }

    /// Apply a pending transition, then render one frame of the running
    /// effect into the canvas base
    pub fn update<const MAX_LEDS: usize>(
        &mut self,
        now: Instant,
        presence: Presence,
        style: Style,
        canvas: &mut Canvas<MAX_LEDS>,
    ) -> Progress {
        if let Some(next) = self.pending.take() {
            if let Some(entered_at) = self.entered_at {
                let ctx = FrameContext {
                    now,
                    elapsed: now.saturating_duration_since(entered_at),
                    presence,
                    previous: canvas.output(),
                };
                self.current.exit(&ctx);
            }

            canvas.set_style(style);
            self.current = next;
            self.entered_at = Some(now);

            let (base, previous) = canvas.split_mut();
            let ctx = FrameContext {
                now,
                elapsed: Duration::from_ticks(0),
                presence,
                previous,
            };
            self.current.enter(&ctx, base);
        } else if canvas.style() != style {
            canvas.set_style(style);
        }

        let entered_at = *self.entered_at.get_or_insert(now);
        let (base, previous) = canvas.split_mut();
        let ctx = FrameContext {
            now,
            elapsed: now.saturating_duration_since(entered_at),
            presence,
            previous,
        };
        self.current.update(&ctx, base)
    }
}
