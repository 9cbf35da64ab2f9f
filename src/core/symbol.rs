//! Scrambled wire symbols and observed groups
//!
//! A symbol is one of the letters `a`..`g` as it appears in the notes. Its
//! letter says nothing about which display position it actually drives.

use super::slot::{Slot, SlotSet};
use crate::error::RecordError;
use std::fmt;
use std::str::FromStr;

/// One of the seven scrambled wire identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Slot for Symbol {
    const ALL: [Self; 7] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl Symbol {
    /// The letter used for this symbol in the notes
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::A => 'a',
            Self::B => 'b',
            Self::C => 'c',
            Self::D => 'd',
            Self::E => 'e',
            Self::F => 'f',
            Self::G => 'g',
        }
    }

    /// Parse a lowercase letter `a`..`g`
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'a' => Some(Self::A),
            'b' => Some(Self::B),
            'c' => Some(Self::C),
            'd' => Some(Self::D),
            'e' => Some(Self::E),
            'f' => Some(Self::F),
            'g' => Some(Self::G),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// An unordered set of symbols lit together for one digit
pub type Group = SlotSet<Symbol>;

impl Group {
    /// Letters of the group in alphabetical order, as written in the notes
    #[must_use]
    pub fn letters(self) -> String {
        self.iter().map(Symbol::letter).collect()
    }
}

impl FromStr for Group {
    type Err = RecordError;

    /// Parse a token such as `"cdfeb"`
    ///
    /// Letter order is irrelevant; repeated letters are rejected because a
    /// wire cannot be lit twice.
    ///
    /// # Examples
    /// ```
    /// use segment_decoder::core::Group;
    ///
    /// let group: Group = "fbcad".parse().unwrap();
    /// assert_eq!(group.len(), 5);
    /// assert_eq!(group.letters(), "abcdf");
    /// assert!("abx".parse::<Group>().is_err());
    /// ```
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if token.is_empty() {
            return Err(RecordError::EmptyGroup);
        }

        let mut group = Self::empty();
        for letter in token.chars() {
            let symbol = Symbol::from_letter(letter).ok_or(RecordError::InvalidSymbol(letter))?;
            if !group.insert(symbol) {
                return Err(RecordError::DuplicateSymbol(symbol));
            }
        }

        Ok(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_round_trip() {
        for symbol in Symbol::ALL {
            assert_eq!(Symbol::from_letter(symbol.letter()), Some(symbol));
        }
        assert_eq!(Symbol::from_letter('h'), None);
        assert_eq!(Symbol::from_letter('A'), None);
    }

    #[test]
    fn group_parse_ignores_order() {
        let left: Group = "cdfeb".parse().unwrap();
        let right: Group = "bcdef".parse().unwrap();
        assert_eq!(left, right);
        assert_eq!(left.letters(), "bcdef");
    }

    #[test]
    fn group_parse_rejects_bad_letters() {
        assert!(matches!(
            "abz".parse::<Group>(),
            Err(RecordError::InvalidSymbol('z'))
        ));
        assert!(matches!(
            "aBc".parse::<Group>(),
            Err(RecordError::InvalidSymbol('B'))
        ));
    }

    #[test]
    fn group_parse_rejects_repeats() {
        assert!(matches!(
            "abca".parse::<Group>(),
            Err(RecordError::DuplicateSymbol(Symbol::A))
        ));
    }

    #[test]
    fn group_parse_rejects_empty() {
        assert!(matches!("".parse::<Group>(), Err(RecordError::EmptyGroup)));
    }

    #[test]
    fn group_display_uses_letters() {
        let group: Group = "ab".parse().unwrap();
        assert_eq!(group.to_string(), "{a, b}");
    }
}
