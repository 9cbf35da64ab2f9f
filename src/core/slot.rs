//! Closed seven-member domains and compact sets over them
//!
//! Both the scrambled wire symbols and the canonical display positions have
//! exactly seven members. They share a bitset representation here, but remain
//! separate types so one can never be used in place of the other.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// Bit mask covering all seven members
const FULL_MASK: u8 = 0b111_1111;

/// A member of a closed, seven-element domain
pub trait Slot: Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + 'static {
    /// Every member, ordered by index
    const ALL: [Self; 7];

    /// Index of this member (0-6)
    fn index(self) -> usize;

    /// Look up a member by index
    #[must_use]
    fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Set of members of a seven-element domain, stored as a 7-bit mask
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotSet<T> {
    bits: u8,
    _slot: PhantomData<T>,
}

impl<T: Slot> SlotSet<T> {
    /// Create a set from a raw bit mask; bits above the seventh are ignored
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            bits: bits & FULL_MASK,
            _slot: PhantomData,
        }
    }

    /// The empty set
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self::from_bits(0)
    }

    /// The set of all seven members
    #[inline]
    #[must_use]
    pub const fn full() -> Self {
        Self::from_bits(FULL_MASK)
    }

    /// A set holding exactly one member
    #[inline]
    #[must_use]
    pub fn single(slot: T) -> Self {
        Self::from_bits(1 << slot.index())
    }

    /// Raw bit mask (bit `i` set when the member with index `i` is present)
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.bits
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    #[inline]
    #[must_use]
    pub fn contains(self, slot: T) -> bool {
        self.bits & (1 << slot.index()) != 0
    }

    /// Add a member, returning `true` if it was not already present
    pub fn insert(&mut self, slot: T) -> bool {
        let present = self.contains(slot);
        self.bits |= 1 << slot.index();
        !present
    }

    /// Remove a member, returning `true` if it was present
    pub fn remove(&mut self, slot: T) -> bool {
        let present = self.contains(slot);
        self.bits &= !(1 << slot.index());
        present
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self::from_bits(self.bits | other.bits)
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self::from_bits(self.bits & other.bits)
    }

    /// Members of `self` that are not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self::from_bits(self.bits & !other.bits)
    }

    /// Members missing from this set
    #[inline]
    #[must_use]
    pub const fn complement(self) -> Self {
        Self::from_bits(!self.bits)
    }

    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.bits & !other.bits == 0
    }

    /// The sole member, if the set has exactly one
    #[must_use]
    pub fn only(self) -> Option<T> {
        if self.len() == 1 {
            T::from_index(self.bits.trailing_zeros() as usize)
        } else {
            None
        }
    }

    /// Iterate over members in index order
    pub fn iter(self) -> impl Iterator<Item = T> {
        T::ALL.into_iter().filter(move |&slot| self.contains(slot))
    }
}

impl<T: Slot> Default for SlotSet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Slot> FromIterator<T> for SlotSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::empty();
        for slot in iter {
            set.insert(slot);
        }
        set
    }
}

impl<T: Slot> fmt::Display for SlotSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, slot) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{slot}")?;
        }
        write!(f, "}}")
    }
}

impl<T: Slot> fmt::Debug for SlotSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
