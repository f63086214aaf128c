//! Presence signal and the sleep/wake policy built on top of it
//!
//! The distance reading arrives already smoothed from the sensor driver.
//! This module only classifies it and decides when the mirror should go to
//! sleep, wake up, or advance to the next preset.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    error::ConfigError,
    scheduler::{EffectScheduler, Override},
};

const DEFAULT_MIN_DISTANCE_CM: u16 = 16;
const DEFAULT_MAX_DISTANCE_CM: u16 = 150;
const DEFAULT_AUDIENCE_DISTANCE_CM: u16 = 100;
const DEFAULT_IDLE_TIMEOUT_MS: u64 = 84_000;
const DEFAULT_EARLY_SLEEP_MS: u64 = 8_500;

/// Classified distance reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Presence {
    /// Smoothed distance, clamped to the sensor range
    pub distance_cm: u16,
    /// Position within the sensor range, 0 at the near end, 255 at the far end
    pub fraction: u8,
    /// Someone stands within audience distance
    pub present: bool,
}

/// Sensor range and audience timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenceConfig {
    pub min_distance_cm: u16,
    pub max_distance_cm: u16,
    /// Readings at or below this distance count as an audience
    pub audience_distance_cm: u16,
    /// Go to sleep after no audience was seen for this long
    pub idle_timeout: Duration,
    /// Go to sleep when the first preset ran this long without an audience
    pub early_sleep: Option<Duration>,
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self {
            min_distance_cm: DEFAULT_MIN_DISTANCE_CM,
            max_distance_cm: DEFAULT_MAX_DISTANCE_CM,
            audience_distance_cm: DEFAULT_AUDIENCE_DISTANCE_CM,
            idle_timeout: Duration::from_millis(DEFAULT_IDLE_TIMEOUT_MS),
            early_sleep: Some(Duration::from_millis(DEFAULT_EARLY_SLEEP_MS)),
        }
    }
}

impl PresenceConfig {
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.min_distance_cm >= self.max_distance_cm {
            return Err(ConfigError::InvalidDistanceRange {
                min_cm: self.min_distance_cm,
                max_cm: self.max_distance_cm,
            });
        }
        Ok(())
    }

    /// Classify a smoothed distance reading
    #[allow(clippy::cast_possible_truncation)]
    pub fn reading(&self, distance_cm: u16) -> Presence {
        let distance_cm = distance_cm.clamp(self.min_distance_cm, self.max_distance_cm);
        let range = u32::from(self.max_distance_cm.saturating_sub(self.min_distance_cm));
        let fraction = if range == 0 {
            0
        } else {
            let offset = u32::from(distance_cm - self.min_distance_cm);
            ((offset * 255 + range / 2) / range) as u8
        };

        Presence {
            distance_cm,
            fraction,
            present: distance_cm <= self.audience_distance_cm,
        }
    }
}

/// Decision taken by [`AudienceWatch::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchAction {
    /// No audience for too long, sleep override activated
    FellAsleep,
    /// Audience showed up while sleeping
    WokeUp,
    /// Current preset finished, moved on to the next one
    Advanced,
}

/// Sleep, wake and auto-advance policy
#[derive(Debug, Clone)]
pub struct AudienceWatch {
    config: PresenceConfig,
    auto_advance: bool,
    last_seen: Option<Instant>,
}

impl AudienceWatch {
    pub const fn new(config: PresenceConfig, auto_advance: bool) -> Self {
        Self {
            config,
            auto_advance,
            last_seen: None,
        }
    }

    pub const fn config(&self) -> &PresenceConfig {
        &self.config
    }

    pub const fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    pub fn set_auto_advance(&mut self, enabled: bool) {
        self.auto_advance = enabled;
    }

    /// Flip auto-advance and return the new value
    pub fn toggle_auto_advance(&mut self) -> bool {
        self.auto_advance = !self.auto_advance;
        self.auto_advance
    }

    /// Time an audience was last detected (or the watch started)
    pub const fn last_seen(&self) -> Option<Instant> {
        self.last_seen
    }

    /// Apply the policy after the scheduler ran its update for this tick
    pub fn apply<const MAX_PRESETS: usize>(
        &mut self,
        now: Instant,
        presence: Presence,
        scheduler: &mut EffectScheduler<MAX_PRESETS>,
    ) -> Option<WatchAction> {
        if presence.present {
            self.last_seen = Some(now);
        }
        let last_seen = *self.last_seen.get_or_insert(now);

        match scheduler.override_mode() {
            Override::SleepAwaitingPresence if scheduler.has_finished() => {
                if self.auto_advance {
                    scheduler.set_preset(0);
                } else {
                    scheduler.set_override(Override::None);
                }
                self.last_seen = Some(now);
                #[cfg(feature = "esp32-log")]
                println!("[presence] audience present, waking up");
                Some(WatchAction::WokeUp)
            }
            Override::None => {
                let idle = now.saturating_duration_since(last_seen) > self.config.idle_timeout;
                let early = self.config.early_sleep.is_some_and(|limit| {
                    !presence.present
                        && scheduler.preset_index() == 0
                        && scheduler.time_in_effect(now) > limit
                });

                if idle || early {
                    scheduler.set_override(Override::SleepAwaitingPresence);
                    #[cfg(feature = "esp32-log")]
                    println!("[presence] lost interest from audience, going to sleep");
                    Some(WatchAction::FellAsleep)
                } else if self.auto_advance && scheduler.has_finished() {
                    scheduler.next_preset();
                    Some(WatchAction::Advanced)
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}
