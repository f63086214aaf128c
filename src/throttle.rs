//! Non-blocking rate limiting
//!
//! Effects run on every tick but perform their slower animation steps (fades,
//! hue drift) only when a fixed period of wall-clock time has passed. Nothing
//! ever sleeps.

use embassy_time::{Duration, Instant};

/// Gate that opens at most once per period
#[derive(Debug, Clone)]
pub struct Throttle {
    period: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub const fn new(period: Duration) -> Self {
        Self { period, last: None }
    }

    pub const fn from_millis(period_ms: u64) -> Self {
        Self::new(Duration::from_millis(period_ms))
    }

    /// Re-arm the gate, the next `ready` call starts a new period
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Check whether a full period passed since the gate last opened
    ///
    /// The first call after construction or [`Throttle::reset`] only arms the
    /// gate.
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.last {
            None => {
                self.last = Some(now);
                false
            }
            Some(last) if now.saturating_duration_since(last) < self.period => false,
            Some(_) => {
                self.last = Some(now);
                true
            }
        }
    }
}
