//! Preset list
//!
//! A preset binds an effect to the style it is shown with and to how long it
//! runs. The list order is the cycling order.

use embassy_time::Duration;
use heapless::Vec;

use crate::{effect::EffectId, error::ConfigError, style::Style};

/// One entry of the cycling list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub effect: EffectId,
    pub style: Style,
    /// Zero runs the effect until it signals completion itself
    pub duration: Duration,
}

impl Preset {
    pub const fn new(effect: EffectId, style: Style, duration_ms: u64) -> Self {
        Self {
            effect,
            style,
            duration: Duration::from_millis(duration_ms),
        }
    }

    /// Preset running until the effect finishes on its own
    pub const fn until_finished(effect: EffectId, style: Style) -> Self {
        Self::new(effect, style, 0)
    }
}

/// Non-empty, fixed capacity list of presets
///
/// Replaced as a whole, never edited in place.
#[derive(Debug, Clone)]
pub struct PresetList<const MAX_PRESETS: usize> {
    presets: Vec<Preset, MAX_PRESETS>,
}

impl<const MAX_PRESETS: usize> PresetList<MAX_PRESETS> {
    pub fn new(presets: &[Preset]) -> Result<Self, ConfigError> {
        if presets.is_empty() {
            return Err(ConfigError::EmptyPresetList);
        }
        let presets = Vec::from_slice(presets).map_err(|()| ConfigError::TooManyPresets {
            count: presets.len(),
            capacity: MAX_PRESETS,
        })?;

        Ok(Self { presets })
    }

    /// Number of presets, never zero
    pub fn count(&self) -> usize {
        self.presets.len()
    }

    /// Preset at `index`, clamped to the last entry
    pub fn clamped(&self, index: usize) -> (usize, &Preset) {
        let index = index.min(self.presets.len() - 1);
        (index, &self.presets[index])
    }

    pub fn get(&self, index: usize) -> Option<&Preset> {
        self.presets.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn as_slice(&self) -> &[Preset] {
        &self.presets
    }
}
