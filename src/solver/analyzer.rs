//! Frequency and structure analysis of signal groups
//!
//! Builds the initial candidate sets for a record from two independent
//! sources of evidence:
//!
//! 1. How many signal groups each symbol appears in. Across the ten digits
//!    every position is lit a fixed number of times, so the count narrows a
//!    symbol to the positions sharing it.
//! 2. Which of the length-2, length-3 and length-4 groups contain the symbol.
//!    Those lengths identify one, seven and four outright.

use super::candidates::Candidates;
use crate::core::{Digit, Group, Slot, Symbol, positions_with_frequency};
use crate::error::DecodeError;
use rustc_hash::FxHashMap;

/// Group lengths that must occur exactly once among the signals
pub const UNIQUE_LENGTHS: [usize; 4] = [2, 3, 4, 7];

/// The signal groups identified by length alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownGroups {
    pub one: Group,
    pub seven: Group,
    pub four: Group,
    pub eight: Group,
}

impl KnownGroups {
    /// Pick out the groups for one, seven, four and eight
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::MalformedRecord` if any of the lengths 2, 3, 4
    /// or 7 is missing or appears more than once.
    pub fn find(signals: &[Group]) -> Result<Self, DecodeError> {
        let by_length = group_by_length(signals);

        let unique = |length: usize| -> Result<Group, DecodeError> {
            match by_length.get(&length).map(Vec::as_slice) {
                Some(&[group]) => Ok(group),
                other => Err(DecodeError::MalformedRecord {
                    length,
                    found: other.map_or(0, <[Group]>::len),
                }),
            }
        };

        Ok(Self {
            one: unique(2)?,
            seven: unique(3)?,
            four: unique(4)?,
            eight: unique(7)?,
        })
    }

    /// Groups whose digit is known, paired with that digit
    #[must_use]
    pub const fn structural(&self) -> [(Group, Digit); 3] {
        [
            (self.one, Digit::ONE),
            (self.seven, Digit::SEVEN),
            (self.four, Digit::FOUR),
        ]
    }
}

fn group_by_length(signals: &[Group]) -> FxHashMap<usize, Vec<Group>> {
    let mut groups: FxHashMap<usize, Vec<Group>> = FxHashMap::default();
    for &signal in signals {
        groups.entry(signal.len()).or_default().push(signal);
    }
    groups
}

/// Output of the analysis stage for one record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Analysis {
    pub known: KnownGroups,
    pub candidates: Candidates,
}

/// Count, for each symbol, the signal groups that contain it
///
/// Indexed by [`Symbol::index`].
#[must_use]
pub fn symbol_frequencies(signals: &[Group]) -> [usize; 7] {
    let mut counts = [0; 7];
    for signal in signals {
        for symbol in signal.iter() {
            counts[symbol.index()] += 1;
        }
    }
    counts
}

/// Restrict each symbol to positions lit in as many digits as the symbol
/// appears in signal groups
///
/// Ties (top/upper-right at 8, middle/bottom at 7) are left in place.
#[must_use]
pub fn narrow_by_frequency(mut candidates: Candidates, signals: &[Group]) -> Candidates {
    let counts = symbol_frequencies(signals);
    for symbol in Symbol::ALL {
        candidates.narrow(symbol, positions_with_frequency(counts[symbol.index()]));
    }
    candidates
}

/// Restrict every symbol in `group` to the positions of `digit`
#[must_use]
pub fn narrow_by_known_group(mut candidates: Candidates, group: Group, digit: Digit) -> Candidates {
    for symbol in group.iter() {
        candidates.narrow(symbol, digit.positions());
    }
    candidates
}

/// Run both analyses over a record's signal groups
///
/// # Errors
///
/// Returns `DecodeError::MalformedRecord` before any narrowing happens if
/// the signals lack a unique group of length 2, 3, 4 or 7.
///
/// # Examples
/// ```
/// use segment_decoder::core::{Group, Position, Symbol};
/// use segment_decoder::solver::analyze;
///
/// let signals: Vec<Group> = "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab"
///     .split_whitespace()
///     .map(|token| token.parse().unwrap())
///     .collect();
///
/// let analysis = analyze(&signals).unwrap();
/// // 'e' appears in six groups: only the upper-left segment is lit that often
/// assert_eq!(analysis.candidates.get(Symbol::E).only(), Some(Position::UpperLeft));
/// ```
pub fn analyze(signals: &[Group]) -> Result<Analysis, DecodeError> {
    let known = KnownGroups::find(signals)?;

    let candidates = known.structural().into_iter().fold(
        narrow_by_frequency(Candidates::unconstrained(), signals),
        |candidates, (group, digit)| narrow_by_known_group(candidates, group, digit),
    );

    Ok(Analysis { known, candidates })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Position, PositionSet, positions};

    fn groups(text: &str) -> Vec<Group> {
        text.split_whitespace()
            .map(|token| token.parse().unwrap())
            .collect()
    }

    const CANONICAL: &str = "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab";

    #[test]
    fn frequencies_of_canonical_record() {
        let counts = symbol_frequencies(&groups(CANONICAL));
        // a b c d e f g
        assert_eq!(counts, [8, 9, 7, 8, 6, 7, 4]);
    }

    #[test]
    fn frequency_narrowing_leaves_ties() {
        let candidates = narrow_by_frequency(Candidates::unconstrained(), &groups(CANONICAL));
        let top_or_right = positions(&[Position::Top, Position::UpperRight]);
        let middle_or_bottom = positions(&[Position::Middle, Position::Bottom]);

        assert_eq!(candidates.get(Symbol::A), top_or_right);
        assert_eq!(candidates.get(Symbol::D), top_or_right);
        assert_eq!(candidates.get(Symbol::C), middle_or_bottom);
        assert_eq!(candidates.get(Symbol::F), middle_or_bottom);
        assert_eq!(candidates.get(Symbol::B), PositionSet::single(Position::LowerRight));
        assert_eq!(candidates.get(Symbol::E), PositionSet::single(Position::UpperLeft));
        assert_eq!(candidates.get(Symbol::G), PositionSet::single(Position::LowerLeft));
    }

    #[test]
    fn unexpected_frequency_empties_candidates() {
        // A lone group gives every symbol a count of 0 or 1, matching no position
        let candidates = narrow_by_frequency(Candidates::unconstrained(), &groups("ab"));
        assert!(candidates.get(Symbol::A).is_empty());
        assert!(candidates.has_contradiction());
    }

    #[test]
    fn known_group_narrowing_only_intersects() {
        let one: Group = "ab".parse().unwrap();
        let candidates = narrow_by_known_group(Candidates::unconstrained(), one, Digit::ONE);

        assert_eq!(candidates.get(Symbol::A), Digit::ONE.positions());
        assert_eq!(candidates.get(Symbol::B), Digit::ONE.positions());
        assert_eq!(candidates.get(Symbol::C), PositionSet::full());
    }

    #[test]
    fn find_known_groups() {
        let known = KnownGroups::find(&groups(CANONICAL)).unwrap();
        assert_eq!(known.one.letters(), "ab");
        assert_eq!(known.seven.letters(), "abd");
        assert_eq!(known.four.letters(), "abef");
        assert_eq!(known.eight.len(), 7);
    }

    #[test]
    fn missing_four_is_malformed() {
        let signals = groups("acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb cagedb ab");
        assert_eq!(
            analyze(&signals),
            Err(DecodeError::MalformedRecord {
                length: 4,
                found: 0
            })
        );
    }

    #[test]
    fn repeated_one_is_malformed() {
        let signals = groups("acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab bc");
        assert_eq!(
            KnownGroups::find(&signals),
            Err(DecodeError::MalformedRecord {
                length: 2,
                found: 2
            })
        );
    }

    #[test]
    fn analysis_of_canonical_record() {
        let analysis = analyze(&groups(CANONICAL)).unwrap();
        let candidates = analysis.candidates;

        // 'a' and 'b' form the one; 'a' counts 8 so it must be upper-right
        assert_eq!(candidates.get(Symbol::A).only(), Some(Position::UpperRight));
        assert_eq!(candidates.get(Symbol::B).only(), Some(Position::LowerRight));
        // 'f' is in the four, which rules out the bottom
        assert_eq!(candidates.get(Symbol::F).only(), Some(Position::Middle));
        // 'd' and 'c' still need exclusion
        assert_eq!(candidates.get(Symbol::D).len(), 2);
        assert_eq!(candidates.get(Symbol::C).len(), 2);
    }
}
