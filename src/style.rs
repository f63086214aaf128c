//! Segmentation styles
//!
//! A style is a symmetry transform that copies or mirrors a short base
//! pattern across the four sides of the mirror. Each style dictates how many
//! base pixels (`s`) the running effect has to compute.

const STYLE_NAME_FULL_STRIP: &str = "full_strip";
const STYLE_NAME_COPIED_SIDES: &str = "copied_sides";
const STYLE_NAME_PERIODIC_OPPOSITE_CORNERS_4: &str = "periodic_opposite_corners_4";
const STYLE_NAME_PERIODIC_OPPOSITE_CORNERS_2: &str = "periodic_opposite_corners_2";
const STYLE_NAME_UNIDIRECTIONAL_SIDE_TO_SIDE: &str = "unidirectional_side_to_side";
const STYLE_NAME_BIDIRECTIONAL_SIDE_TO_SIDE: &str = "bidirectional_side_to_side";
const STYLE_NAME_HALFWAY_PERIODIC_SPLIT_2: &str = "halfway_periodic_split_2";

const STYLE_ID_FULL_STRIP: u8 = 0;
const STYLE_ID_COPIED_SIDES: u8 = 1;
const STYLE_ID_PERIODIC_OPPOSITE_CORNERS_4: u8 = 2;
const STYLE_ID_PERIODIC_OPPOSITE_CORNERS_2: u8 = 3;
const STYLE_ID_UNIDIRECTIONAL_SIDE_TO_SIDE: u8 = 4;
const STYLE_ID_BIDIRECTIONAL_SIDE_TO_SIDE: u8 = 5;
const STYLE_ID_HALFWAY_PERIODIC_SPLIT_2: u8 = 6;

/// Number of available styles
pub const STYLE_COUNT: u8 = 7;

/// Strip segmentation style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Style {
    /// No segments, the base pattern covers the whole loop (`s = N`)
    #[default]
    FullStrip = STYLE_ID_FULL_STRIP,
    /// Every side is a copy of the base (`s = L`)
    CopiedSides = STYLE_ID_COPIED_SIDES,
    /// Bottom and top copy the base, right and left flip it (`s = L`)
    PeriodicOppositeCorners4 = STYLE_ID_PERIODIC_OPPOSITE_CORNERS_4,
    /// First half of the loop copies the base, second half flips it (`s = 2L`)
    PeriodicOppositeCorners2 = STYLE_ID_PERIODIC_OPPOSITE_CORNERS_2,
    /// Pattern travels from the bottom side to the top side (`s = L + 2`)
    UnidirectionalSideToSide = STYLE_ID_UNIDIRECTIONAL_SIDE_TO_SIDE,
    /// Pattern travels from top and bottom towards the middle (`s = (L + 1) / 2 + 1`)
    BidirectionalSideToSide = STYLE_ID_BIDIRECTIONAL_SIDE_TO_SIDE,
    /// Base split half-way across the corners (`s = ((L + 1) / 2) * 2`)
    HalfwayPeriodicSplit2 = STYLE_ID_HALFWAY_PERIODIC_SPLIT_2,
}

impl Style {
    /// All styles in cycling order
    pub const ALL: [Style; STYLE_COUNT as usize] = [
        Self::FullStrip,
        Self::CopiedSides,
        Self::PeriodicOppositeCorners4,
        Self::PeriodicOppositeCorners2,
        Self::UnidirectionalSideToSide,
        Self::BidirectionalSideToSide,
        Self::HalfwayPeriodicSplit2,
    ];

    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            STYLE_ID_FULL_STRIP => Self::FullStrip,
            STYLE_ID_COPIED_SIDES => Self::CopiedSides,
            STYLE_ID_PERIODIC_OPPOSITE_CORNERS_4 => Self::PeriodicOppositeCorners4,
            STYLE_ID_PERIODIC_OPPOSITE_CORNERS_2 => Self::PeriodicOppositeCorners2,
            STYLE_ID_UNIDIRECTIONAL_SIDE_TO_SIDE => Self::UnidirectionalSideToSide,
            STYLE_ID_BIDIRECTIONAL_SIDE_TO_SIDE => Self::BidirectionalSideToSide,
            STYLE_ID_HALFWAY_PERIODIC_SPLIT_2 => Self::HalfwayPeriodicSplit2,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullStrip => STYLE_NAME_FULL_STRIP,
            Self::CopiedSides => STYLE_NAME_COPIED_SIDES,
            Self::PeriodicOppositeCorners4 => STYLE_NAME_PERIODIC_OPPOSITE_CORNERS_4,
            Self::PeriodicOppositeCorners2 => STYLE_NAME_PERIODIC_OPPOSITE_CORNERS_2,
            Self::UnidirectionalSideToSide => STYLE_NAME_UNIDIRECTIONAL_SIDE_TO_SIDE,
            Self::BidirectionalSideToSide => STYLE_NAME_BIDIRECTIONAL_SIDE_TO_SIDE,
            Self::HalfwayPeriodicSplit2 => STYLE_NAME_HALFWAY_PERIODIC_SPLIT_2,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.as_str() == s)
    }

    /// Human readable name
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullStrip => "Full strip",
            Self::CopiedSides => "Copied sides",
            Self::PeriodicOppositeCorners4 => "Periodic opposite corners, N=4",
            Self::PeriodicOppositeCorners2 => "Periodic opposite corners, N=2",
            Self::UnidirectionalSideToSide => "Uni-directional side-to-side",
            Self::BidirectionalSideToSide => "Bi-directional side-to-side",
            Self::HalfwayPeriodicSplit2 => "Half-way periodic split, N=2",
        }
    }

    /// Number of base pixels `s` the style needs for a side length `L`
    ///
    /// Relies on integer division, e.g. for the bi-directional style
    /// `L = 4 -> s = 3`, `L = 5 -> s = 4`, `L = 6 -> s = 4`. Saturates at
    /// `usize::MAX` instead of overflowing.
    pub const fn base_len(self, side: usize) -> usize {
        match self {
            Self::FullStrip => side.saturating_mul(4),
            Self::CopiedSides | Self::PeriodicOppositeCorners4 => side,
            Self::PeriodicOppositeCorners2 => side.saturating_mul(2),
            Self::UnidirectionalSideToSide => side.saturating_add(2),
            Self::BidirectionalSideToSide => side.div_ceil(2) + 1,
            Self::HalfwayPeriodicSplit2 => side.div_ceil(2).saturating_mul(2),
        }
    }

    /// Next style, wrapping around
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % STYLE_COUNT as usize]
    }

    /// Previous style, wrapping around
    #[must_use]
    pub const fn prev(self) -> Self {
        Self::ALL[(self as usize + STYLE_COUNT as usize - 1) % STYLE_COUNT as usize]
    }
}
