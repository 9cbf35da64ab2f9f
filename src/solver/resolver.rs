//! Constraint resolution
//!
//! Turns the analyzer's candidate sets into a complete [`Mapping`].
//!
//! # Algorithm
//! 1. Propagate exclusions to a fixed point: a symbol narrowed to one
//!    position removes that position from every other symbol.
//! 2. Apply the topology deductions, in order:
//!    - the symbol in seven but not in one is the top segment
//!    - symbols outside four cannot drive any of four's segments, which
//!      separates the bottom from the middle
//! 3. Propagate again to a fixed point.
//!
//! Every step only removes candidates, so the loop always terminates.

use super::analyzer::{Analysis, KnownGroups};
use super::candidates::Candidates;
use super::mapping::Mapping;
use crate::core::{Digit, PositionSet, Slot, Symbol};
use crate::error::DecodeError;

/// A one-shot deduction specific to the seven-segment layout
pub type Deduction = fn(Candidates, &KnownGroups) -> Candidates;

/// Topology deductions, in the order they are applied
pub const DEDUCTIONS: [Deduction; 2] = [isolate_top, separate_middle_from_bottom];

/// Remove every solved symbol's position from all other symbols (one pass)
#[must_use]
pub fn propagate_exclusions(candidates: Candidates) -> Candidates {
    let mut next = candidates;
    for (solved, position) in candidates.solved() {
        let taken = PositionSet::single(position);
        for symbol in Symbol::ALL {
            if symbol != solved {
                next.exclude(symbol, taken);
            }
        }
    }
    next
}

/// Repeat [`propagate_exclusions`] until nothing changes
///
/// # Errors
///
/// Returns `DecodeError::Resolution` as soon as any symbol has no
/// candidates left.
pub fn propagate_to_fixed_point(mut candidates: Candidates) -> Result<Candidates, DecodeError> {
    loop {
        if candidates.has_contradiction() {
            return Err(DecodeError::Resolution {
                unresolved: candidates.unresolved(),
            });
        }

        let next = propagate_exclusions(candidates);
        if next == candidates {
            return Ok(candidates);
        }
        candidates = next;
    }
}

/// Seven minus one leaves exactly the top segment
#[must_use]
pub fn isolate_top(mut candidates: Candidates, known: &KnownGroups) -> Candidates {
    let top_only = Digit::SEVEN.positions().difference(Digit::ONE.positions());
    for symbol in known.seven.difference(known.one).iter() {
        candidates.narrow(symbol, top_only);
    }
    candidates
}

/// Symbols missing from four cannot drive four's segments
///
/// Of the two symbols tied at frequency 7, only the bottom one is outside
/// four, so this settles the middle/bottom tie.
#[must_use]
pub fn separate_middle_from_bottom(mut candidates: Candidates, known: &KnownGroups) -> Candidates {
    for symbol in known.four.complement().iter() {
        candidates.exclude(symbol, Digit::FOUR.positions());
    }
    candidates
}

/// Resolve the analyzed record into a complete mapping
///
/// # Errors
///
/// Returns `DecodeError::Resolution` carrying every symbol that does not
/// end up with exactly one position. No partial mapping is ever returned.
pub fn resolve(analysis: &Analysis) -> Result<Mapping, DecodeError> {
    let propagated = propagate_to_fixed_point(analysis.candidates)?;

    let deduced = DEDUCTIONS
        .iter()
        .fold(propagated, |candidates, deduction| {
            deduction(candidates, &analysis.known)
        });

    let resolved = propagate_to_fixed_point(deduced)?;
    if !resolved.is_resolved() {
        return Err(DecodeError::Resolution {
            unresolved: resolved.unresolved(),
        });
    }

    Mapping::from_pairs(resolved.solved()).ok_or_else(|| DecodeError::Resolution {
        unresolved: resolved.iter().collect(),
    })
}
