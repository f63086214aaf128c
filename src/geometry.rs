//! Infinity mirror geometry
//!
//! The strip is bent into a square loop of four equal sides of length `L`,
//! making up `N = 4 * L` pixels:
//!
//! ```text
//!          L
//!     ┌────<────┐
//!     │         │
//!  L  v         ^  L
//!     │         │
//!     0────>────┘
//!          L
//! ```

use core::ops::Range;

use crate::error::ConfigError;

/// Number of sides of the mirror
pub const SIDES: usize = 4;

/// Side of the mirror, in strip order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Bottom,
    Right,
    Top,
    Left,
}

impl Side {
    /// All sides in strip order
    pub const ALL: [Side; SIDES] = [Side::Bottom, Side::Right, Side::Top, Side::Left];

    /// Position of the side along the strip
    pub const fn ordinal(self) -> usize {
        match self {
            Self::Bottom => 0,
            Self::Right => 1,
            Self::Top => 2,
            Self::Left => 3,
        }
    }
}

/// Validated mirror dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    side: usize,
}

impl Geometry {
    /// Create a geometry with `side` LEDs per side, fitting into `capacity`
    /// LEDs of frame storage
    pub const fn new(side: usize, capacity: usize) -> Result<Self, ConfigError> {
        if side == 0 {
            return Err(ConfigError::ZeroSideLength);
        }
        let Some(leds) = side.checked_mul(SIDES) else {
            return Err(ConfigError::StripTooLong {
                leds: usize::MAX,
                capacity,
            });
        };
        if leds > capacity {
            return Err(ConfigError::StripTooLong { leds, capacity });
        }
        Ok(Self { side })
    }

    /// Number of LEDs on each side (`L`)
    pub const fn side(self) -> usize {
        self.side
    }

    /// Number of LEDs of the full loop (`N`)
    pub const fn led_count(self) -> usize {
        self.side * SIDES
    }

    /// Strip indices covered by a side
    pub const fn side_range(self, side: Side) -> Range<usize> {
        let start = side.ordinal() * self.side;
        start..start + self.side
    }
}
