//! Decimal digits and their segment patterns
//!
//! The digit table is fixed: each digit lights a known set of positions.
//!
//! ```text
//!  _     _  _     _  _  _  _  _
//! | |  | _| _||_||_ |_   ||_||_|
//! |_|  ||_  _|  | _||_|  ||_| _|
//! ```

use super::position::{Position, PositionSet, positions};
use super::slot::Slot;
use std::fmt;
use std::str::FromStr;

use Position::{Bottom, LowerLeft, LowerRight, Middle, Top, UpperLeft, UpperRight};

/// Lit positions for each digit, indexed by value
const SEGMENTS: [PositionSet; 10] = [
    positions(&[Top, UpperLeft, UpperRight, LowerLeft, LowerRight, Bottom]),
    positions(&[UpperRight, LowerRight]),
    positions(&[Top, UpperRight, Middle, LowerLeft, Bottom]),
    positions(&[Top, UpperRight, Middle, LowerRight, Bottom]),
    positions(&[UpperLeft, UpperRight, Middle, LowerRight]),
    positions(&[Top, UpperLeft, Middle, LowerRight, Bottom]),
    positions(&[Top, UpperLeft, Middle, LowerLeft, LowerRight, Bottom]),
    positions(&[Top, UpperRight, LowerRight]),
    positions(&[Top, UpperLeft, UpperRight, Middle, LowerLeft, LowerRight, Bottom]),
    positions(&[Top, UpperLeft, UpperRight, Middle, LowerRight, Bottom]),
];

/// A decimal digit shown on a seven-segment display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);
    pub const TWO: Self = Self(2);
    pub const THREE: Self = Self(3);
    pub const FOUR: Self = Self(4);
    pub const FIVE: Self = Self(5);
    pub const SIX: Self = Self(6);
    pub const SEVEN: Self = Self(7);
    pub const EIGHT: Self = Self(8);
    pub const NINE: Self = Self(9);

    /// All ten digits in ascending order
    pub const ALL: [Self; 10] = [
        Self::ZERO,
        Self::ONE,
        Self::TWO,
        Self::THREE,
        Self::FOUR,
        Self::FIVE,
        Self::SIX,
        Self::SEVEN,
        Self::EIGHT,
        Self::NINE,
    ];

    /// Create a digit from its value (0-9)
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value < 10 { Some(Self(value)) } else { None }
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Positions lit when this digit is shown
    #[inline]
    #[must_use]
    pub const fn positions(self) -> PositionSet {
        SEGMENTS[self.0 as usize]
    }

    /// Find the digit whose lit positions are exactly `lit`
    ///
    /// # Examples
    /// ```
    /// use segment_decoder::core::{Digit, Position, PositionSet};
    ///
    /// let lit: PositionSet = [Position::UpperRight, Position::LowerRight].into_iter().collect();
    /// assert_eq!(Digit::from_positions(lit), Some(Digit::ONE));
    /// assert_eq!(Digit::from_positions(PositionSet::single(Position::Top)), None);
    /// ```
    #[must_use]
    pub fn from_positions(lit: PositionSet) -> Option<Self> {
        Self::ALL.into_iter().find(|digit| digit.positions() == lit)
    }

    /// The digit identified by segment count alone, if only one digit has that count
    ///
    /// Holds for 2 (one), 3 (seven), 4 (four) and 7 (eight).
    #[must_use]
    pub fn with_segment_count(count: usize) -> Option<Self> {
        let mut matching = Self::ALL
            .into_iter()
            .filter(|digit| digit.positions().len() == count);
        match (matching.next(), matching.next()) {
            (Some(digit), None) => Some(digit),
            _ => None,
        }
    }
}

/// Number of digits in which `position` is lit
///
/// Ranges from 4 (lower-left) to 9 (lower-right).
#[must_use]
pub fn frequency(position: Position) -> usize {
    Digit::ALL
        .iter()
        .filter(|digit| digit.positions().contains(position))
        .count()
}

/// All positions lit in exactly `count` digits
///
/// Top and upper-right share a frequency of 8, middle and bottom share 7;
/// the other three frequencies each single out one position.
#[must_use]
pub fn positions_with_frequency(count: usize) -> PositionSet {
    Position::ALL
        .into_iter()
        .filter(|&position| frequency(position) == count)
        .collect()
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Digit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| format!("Invalid digit: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        let sizes: Vec<usize> = Digit::ALL.iter().map(|d| d.positions().len()).collect();
        assert_eq!(sizes, vec![6, 2, 5, 5, 4, 5, 6, 3, 7, 6]);
    }

    #[test]
    fn table_entries_are_distinct() {
        for (i, left) in Digit::ALL.iter().enumerate() {
            for right in &Digit::ALL[i + 1..] {
                assert_ne!(left.positions(), right.positions());
            }
        }
    }

    #[test]
    fn from_positions_inverts_table() {
        for digit in Digit::ALL {
            assert_eq!(Digit::from_positions(digit.positions()), Some(digit));
        }
    }

    #[test]
    fn unique_segment_counts() {
        assert_eq!(Digit::with_segment_count(2), Some(Digit::ONE));
        assert_eq!(Digit::with_segment_count(3), Some(Digit::SEVEN));
        assert_eq!(Digit::with_segment_count(4), Some(Digit::FOUR));
        assert_eq!(Digit::with_segment_count(7), Some(Digit::EIGHT));
        assert_eq!(Digit::with_segment_count(5), None);
        assert_eq!(Digit::with_segment_count(6), None);
        assert_eq!(Digit::with_segment_count(1), None);
    }

    #[test]
    fn position_frequencies() {
        assert_eq!(frequency(Position::Top), 8);
        assert_eq!(frequency(Position::UpperLeft), 6);
        assert_eq!(frequency(Position::UpperRight), 8);
        assert_eq!(frequency(Position::Middle), 7);
        assert_eq!(frequency(Position::LowerLeft), 4);
        assert_eq!(frequency(Position::LowerRight), 9);
        assert_eq!(frequency(Position::Bottom), 7);
    }

    #[test]
    fn frequency_ties() {
        assert_eq!(
            positions_with_frequency(8),
            positions(&[Position::Top, Position::UpperRight])
        );
        assert_eq!(
            positions_with_frequency(7),
            positions(&[Position::Middle, Position::Bottom])
        );
        assert_eq!(
            positions_with_frequency(9),
            PositionSet::single(Position::LowerRight)
        );
        assert!(positions_with_frequency(5).is_empty());
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert_eq!(Digit::new(9), Some(Digit::NINE));
        assert_eq!(Digit::new(10), None);
    }

    #[test]
    fn parse_digit() {
        assert_eq!("7".parse::<Digit>(), Ok(Digit::SEVEN));
        assert!("12".parse::<Digit>().is_err());
        assert!("x".parse::<Digit>().is_err());
    }
}
