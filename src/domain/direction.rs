//! Directional commands
//!
//! A closed set of placement intents. Each variant has exactly two mappings:
//! its rectangle in [`crate::domain::frame`] and its touching edges here.
//! Adding a variant means adding both.

use strum::{Display, EnumIter, EnumString};

use crate::domain::core::Edges;

/// Placement intent for a window
///
/// Names parse and print in kebab-case (`top-left-quarter`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Direction {
    Maximize,
    Center,

    TopHalf,
    BottomHalf,
    LeftHalf,
    RightHalf,

    TopLeftQuarter,
    TopRightQuarter,
    BottomLeftQuarter,
    BottomRightQuarter,

    LeftThird,
    CenterThird,
    RightThird,
    LeftTwoThirds,
    RightTwoThirds,

    TopThird,
    MiddleThird,
    BottomThird,
    TopTwoThirds,
    BottomTwoThirds,

    /// An intent with no geometric meaning (e.g. an unbound action)
    Undefined,
}

impl Direction {
    /// Returns false for variants that have no rectangle
    pub fn has_mapping(self) -> bool {
        !matches!(self, Direction::Undefined)
    }

    /// Edges of the generated rectangle that coincide with the usable screen frame
    pub fn touching_edges(self) -> Edges {
        use Direction::*;

        let vertical_span = Edges::TOP | Edges::BOTTOM;
        let horizontal_span = Edges::LEADING | Edges::TRAILING;

        match self {
            Maximize => Edges::all(),
            Center | Undefined => Edges::empty(),

            TopHalf => Edges::TOP | horizontal_span,
            BottomHalf => Edges::BOTTOM | horizontal_span,
            LeftHalf => Edges::LEADING | vertical_span,
            RightHalf => Edges::TRAILING | vertical_span,

            TopLeftQuarter => Edges::TOP | Edges::LEADING,
            TopRightQuarter => Edges::TOP | Edges::TRAILING,
            BottomLeftQuarter => Edges::BOTTOM | Edges::LEADING,
            BottomRightQuarter => Edges::BOTTOM | Edges::TRAILING,

            LeftThird | LeftTwoThirds => Edges::LEADING | vertical_span,
            CenterThird => vertical_span,
            RightThird | RightTwoThirds => Edges::TRAILING | vertical_span,

            TopThird | TopTwoThirds => Edges::TOP | horizontal_span,
            MiddleThird => horizontal_span,
            BottomThird | BottomTwoThirds => Edges::BOTTOM | horizontal_span,
        }
    }
}
