//! Error types
//!
//! Only configuration can fail. Runtime requests (preset indices, override
//! ordinals) are clamped or ignored instead of being reported.

/// Rejected mirror configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Side length `L` must be at least one LED
    ZeroSideLength,
    /// The full loop (`4 * L`) does not fit into the frame buffers
    StripTooLong { leds: usize, capacity: usize },
    /// At least one preset is required to start the scheduler
    EmptyPresetList,
    /// The preset list does not fit into the preset storage
    TooManyPresets { count: usize, capacity: usize },
    /// The presence sensor range is empty or inverted
    InvalidDistanceRange { min_cm: u16, max_cm: u16 },
}

/// Segmentation precondition violation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentError {
    /// Base buffer holds fewer pixels than the style requires
    BaseTooShort { required: usize, provided: usize },
    /// Output buffer cannot hold the full loop
    OutputTooShort { required: usize, provided: usize },
}
