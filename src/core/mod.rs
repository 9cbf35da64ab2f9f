//! Core domain types for seven-segment decoding
//!
//! Wire symbols, display positions, and the fixed digit table. Everything
//! here is plain data with no I/O.

mod digit;
mod position;
mod slot;
mod symbol;

pub use digit::{Digit, frequency, positions_with_frequency};
pub use position::{Position, PositionSet, positions};
pub use slot::{Slot, SlotSet};
pub use symbol::{Group, Symbol};
