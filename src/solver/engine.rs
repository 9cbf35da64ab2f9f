//! Main decoding interface
//!
//! Recovers the wiring of one record and reads its output digits.

use super::analyzer::analyze;
use super::mapping::Mapping;
use super::resolver::resolve;
use crate::core::{Digit, Group};
use crate::error::DecodeError;
use crate::records::Record;

/// A fully decoded record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub mapping: Mapping,
    pub digits: Vec<Digit>,
}

impl Decoded {
    /// The output digits read as one decimal number
    #[must_use]
    pub fn value(&self) -> u64 {
        digits_to_value(&self.digits)
    }
}

/// Recover the symbol-to-position mapping from a record's signal groups
///
/// # Errors
///
/// Returns `DecodeError::MalformedRecord` if a unique-length group is
/// missing or repeated, or `DecodeError::Resolution` if the signals do not
/// determine a single wiring.
pub fn solve_wiring(signals: &[Group]) -> Result<Mapping, DecodeError> {
    let analysis = analyze(signals)?;
    resolve(&analysis)
}

/// Read one output group as a digit
///
/// # Errors
///
/// Returns `DecodeError::UnknownDigit` if the lit positions match no digit.
///
/// # Examples
/// ```
/// use segment_decoder::core::{Digit, Group, Position, Slot};
/// use segment_decoder::solver::{Mapping, decode_group};
///
/// let identity = Mapping::new(Position::ALL).unwrap();
/// let group: Group = "cf".parse().unwrap();
/// assert_eq!(decode_group(&identity, group), Ok(Digit::ONE));
/// ```
pub fn decode_group(mapping: &Mapping, group: Group) -> Result<Digit, DecodeError> {
    let positions = mapping.translate(group);
    Digit::from_positions(positions).ok_or(DecodeError::UnknownDigit { group, positions })
}

/// Read every output group, failing on the first that is not a digit
///
/// # Errors
///
/// Returns `DecodeError::UnknownDigit` for the first undecodable group.
pub fn decode_outputs(mapping: &Mapping, outputs: &[Group]) -> Result<Vec<Digit>, DecodeError> {
    outputs
        .iter()
        .map(|&group| decode_group(mapping, group))
        .collect()
}

/// Concatenate digits into a decimal number, most significant first
///
/// Saturates at `u64::MAX` rather than overflowing on very long outputs.
#[must_use]
pub fn digits_to_value(digits: &[Digit]) -> u64 {
    digits.iter().fold(0u64, |acc, digit| {
        acc.saturating_mul(10)
            .saturating_add(u64::from(digit.value()))
    })
}

/// Decode a record: resolve its wiring, then read its outputs
///
/// # Errors
///
/// Propagates any [`DecodeError`] from resolution or output decoding.
///
/// # Examples
/// ```
/// use segment_decoder::records::Record;
/// use segment_decoder::solver::decode_record;
///
/// let record: Record = "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf"
///     .parse()
///     .unwrap();
/// let decoded = decode_record(&record).unwrap();
/// assert_eq!(decoded.value(), 5353);
/// ```
pub fn decode_record(record: &Record) -> Result<Decoded, DecodeError> {
    let mapping = solve_wiring(&record.signals)?;
    let digits = decode_outputs(&mapping, &record.outputs)?;
    Ok(Decoded { mapping, digits })
}
