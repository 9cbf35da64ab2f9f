//! Resolved symbol-to-position wiring

use crate::core::{Group, Position, PositionSet, Slot, Symbol};
use std::fmt;

/// A complete bijection from wire symbols to display positions
///
/// Every symbol has a position and no two symbols share one. A `Mapping`
/// cannot be built partially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mapping {
    positions: [Position; 7],
}

impl Mapping {
    /// Create a mapping where symbol `i` drives `positions[i]`
    ///
    /// Returns `None` if two symbols would share a position.
    #[must_use]
    pub fn new(positions: [Position; 7]) -> Option<Self> {
        let covered: PositionSet = positions.into_iter().collect();
        (covered.len() == 7).then_some(Self { positions })
    }

    /// Build a mapping from `(symbol, position)` pairs
    ///
    /// Returns `None` unless the pairs assign every symbol exactly once and
    /// every position exactly once.
    ///
    /// # Examples
    /// ```
    /// use segment_decoder::core::{Position, Slot, Symbol};
    /// use segment_decoder::solver::Mapping;
    ///
    /// let mapping = Mapping::from_pairs(Symbol::ALL.into_iter().zip(Position::ALL)).unwrap();
    /// assert_eq!(mapping.position_of(Symbol::A), Position::Top);
    ///
    /// assert!(Mapping::from_pairs([(Symbol::A, Position::Top)]).is_none());
    /// ```
    pub fn from_pairs<I>(pairs: I) -> Option<Self>
    where
        I: IntoIterator<Item = (Symbol, Position)>,
    {
        let mut positions: [Option<Position>; 7] = [None; 7];
        for (symbol, position) in pairs {
            let slot = &mut positions[symbol.index()];
            if slot.is_some() {
                return None;
            }
            *slot = Some(position);
        }

        let mut resolved = [Position::Top; 7];
        for (slot, position) in resolved.iter_mut().zip(positions) {
            *slot = position?;
        }
        Self::new(resolved)
    }

    #[inline]
    #[must_use]
    pub fn position_of(&self, symbol: Symbol) -> Position {
        self.positions[symbol.index()]
    }

    /// The symbol wired to `position`
    #[must_use]
    pub fn symbol_at(&self, position: Position) -> Symbol {
        Symbol::ALL
            .into_iter()
            .find(|&symbol| self.position_of(symbol) == position)
            .unwrap_or_else(|| unreachable!("mapping covers every position"))
    }

    /// Positions lit by the symbols of `group`
    #[must_use]
    pub fn translate(&self, group: Group) -> PositionSet {
        group.iter().map(|symbol| self.position_of(symbol)).collect()
    }

    /// Symbols that light exactly `lit`; the inverse of [`Mapping::translate`]
    #[must_use]
    pub fn encode(&self, lit: PositionSet) -> Group {
        lit.iter().map(|position| self.symbol_at(position)).collect()
    }

    /// Pairs in symbol order
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, Position)> + '_ {
        Symbol::ALL
            .into_iter()
            .map(move |symbol| (symbol, self.position_of(symbol)))
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (symbol, position)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{symbol}→{}", position.label())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Digit;

    fn shifted() -> Mapping {
        // a→b, b→c, ... g→a
        let mut positions = Position::ALL;
        positions.rotate_left(1);
        Mapping::new(positions).unwrap()
    }

    #[test]
    fn new_rejects_shared_positions() {
        let mut positions = Position::ALL;
        positions[6] = Position::Top;
        assert!(Mapping::new(positions).is_none());
    }

    #[test]
    fn from_pairs_requires_total_assignment() {
        let partial = Symbol::ALL.into_iter().zip(Position::ALL).take(6);
        assert!(Mapping::from_pairs(partial).is_none());
    }

    #[test]
    fn from_pairs_rejects_reassignment() {
        let mut pairs: Vec<_> = Symbol::ALL.into_iter().zip(Position::ALL).collect();
        pairs.push((Symbol::A, Position::Top));
        assert!(Mapping::from_pairs(pairs).is_none());
    }

    #[test]
    fn symbol_at_inverts_position_of() {
        let mapping = shifted();
        for symbol in Symbol::ALL {
            assert_eq!(mapping.symbol_at(mapping.position_of(symbol)), symbol);
        }
        assert_eq!(mapping.position_of(Symbol::G), Position::Top);
    }

    #[test]
    fn encode_then_translate_recovers_digit() {
        let mapping = shifted();
        for digit in Digit::ALL {
            let group = mapping.encode(digit.positions());
            assert_eq!(group.len(), digit.positions().len());
            assert_eq!(mapping.translate(group), digit.positions());
        }
    }

    #[test]
    fn display_uses_labels() {
        let mapping = Mapping::new(Position::ALL).unwrap();
        assert_eq!(mapping.to_string(), "a→a b→b c→c d→d e→e f→f g→g");
    }
}
