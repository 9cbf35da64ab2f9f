//! Canonical display positions
//!
//! ```text
//!  top
//! ┌───┐
//! │   │  upper-left / upper-right
//! ├───┤  middle
//! │   │  lower-left / lower-right
//! └───┘
//!  bottom
//! ```

use super::slot::{Slot, SlotSet};
use std::fmt;

/// One of the seven segments of a display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    Top,
    UpperLeft,
    UpperRight,
    Middle,
    LowerLeft,
    LowerRight,
    Bottom,
}

impl Slot for Position {
    const ALL: [Self; 7] = [
        Self::Top,
        Self::UpperLeft,
        Self::UpperRight,
        Self::Middle,
        Self::LowerLeft,
        Self::LowerRight,
        Self::Bottom,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl Position {
    /// Conventional segment label, `a` (top) through `g` (bottom)
    #[must_use]
    pub const fn label(self) -> char {
        match self {
            Self::Top => 'a',
            Self::UpperLeft => 'b',
            Self::UpperRight => 'c',
            Self::Middle => 'd',
            Self::LowerLeft => 'e',
            Self::LowerRight => 'f',
            Self::Bottom => 'g',
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::UpperLeft => "upper-left",
            Self::UpperRight => "upper-right",
            Self::Middle => "middle",
            Self::LowerLeft => "lower-left",
            Self::LowerRight => "lower-right",
            Self::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of display positions
pub type PositionSet = SlotSet<Position>;

/// Build a position set in a const context
#[must_use]
pub const fn positions(members: &[Position]) -> PositionSet {
    let mut bits = 0u8;
    let mut i = 0;
    while i < members.len() {
        bits |= 1 << members[i] as u8;
        i += 1;
    }
    PositionSet::from_bits(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_index_order() {
        let labels: String = Position::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(labels, "abcdefg");
    }

    #[test]
    fn const_builder_matches_collect() {
        const CORNERS: PositionSet = positions(&[Position::UpperLeft, Position::LowerRight]);
        let collected: PositionSet = [Position::LowerRight, Position::UpperLeft]
            .into_iter()
            .collect();
        assert_eq!(CORNERS, collected);
    }
}
