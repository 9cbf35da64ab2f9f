//! Per-symbol candidate positions

use crate::core::{Position, PositionSet, Slot, Symbol};

/// The positions still possible for each symbol
///
/// Sets only ever shrink while a record is being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidates([PositionSet; 7]);

impl Candidates {
    /// Every symbol may still be at any position
    #[must_use]
    pub const fn unconstrained() -> Self {
        Self([PositionSet::full(); 7])
    }

    #[inline]
    #[must_use]
    pub fn get(&self, symbol: Symbol) -> PositionSet {
        self.0[symbol.index()]
    }

    /// Keep only the positions of `symbol` that are also in `allowed`
    pub fn narrow(&mut self, symbol: Symbol, allowed: PositionSet) {
        let slot = &mut self.0[symbol.index()];
        *slot = slot.intersection(allowed);
    }

    /// Drop `removed` from the positions of `symbol`
    pub fn exclude(&mut self, symbol: Symbol, removed: PositionSet) {
        let slot = &mut self.0[symbol.index()];
        *slot = slot.difference(removed);
    }

    /// Symbols paired with their current candidate sets
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, PositionSet)> + '_ {
        Symbol::ALL
            .into_iter()
            .map(move |symbol| (symbol, self.get(symbol)))
    }

    /// Symbols narrowed to a single position
    pub fn solved(&self) -> impl Iterator<Item = (Symbol, Position)> + '_ {
        self.iter()
            .filter_map(|(symbol, set)| set.only().map(|position| (symbol, position)))
    }

    /// True when every symbol has exactly one candidate
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.0.iter().all(|set| set.len() == 1)
    }

    /// True when some symbol has run out of candidates
    #[must_use]
    pub fn has_contradiction(&self) -> bool {
        self.0.iter().any(|set| set.is_empty())
    }

    /// Symbols without exactly one candidate, for diagnostics
    #[must_use]
    pub fn unresolved(&self) -> Vec<(Symbol, PositionSet)> {
        self.iter().filter(|(_, set)| set.len() != 1).collect()
    }
}

impl Default for Candidates {
    fn default() -> Self {
        Self::unconstrained()
    }
}
