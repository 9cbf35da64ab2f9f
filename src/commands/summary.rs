//! Statistics over decoded records

use crate::core::Digit;
use crate::solver::Decoded;
use rustc_hash::FxHashMap;

/// Digits recognisable from segment count alone
pub const EASY_DIGITS: [Digit; 4] = [Digit::ONE, Digit::FOUR, Digit::SEVEN, Digit::EIGHT];

/// Aggregate statistics for a batch of decoded records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub records: usize,
    pub output_digits: usize,
    /// Sum of every record's output value
    pub total: u64,
    /// Occurrences of each digit among the outputs
    pub histogram: FxHashMap<Digit, usize>,
}

impl Summary {
    /// How many output digits fall in the set `digits`
    ///
    /// Repeated entries in `digits` are counted once.
    #[must_use]
    pub fn count_of(&self, digits: &[Digit]) -> usize {
        Digit::ALL
            .iter()
            .filter(|digit| digits.contains(digit))
            .filter_map(|digit| self.histogram.get(digit))
            .sum()
    }
}

/// Count output digits that belong to `digits`
///
/// # Examples
/// ```
/// use segment_decoder::commands::{EASY_DIGITS, count_digits};
/// use segment_decoder::records::CANONICAL_EXAMPLE;
/// use segment_decoder::solver::decode_record;
///
/// let decoded = decode_record(&CANONICAL_EXAMPLE.parse().unwrap()).unwrap();
/// // 5353 has no 1, 4, 7 or 8
/// assert_eq!(count_digits([&decoded], &EASY_DIGITS), 0);
/// ```
pub fn count_digits<'a, I>(decoded: I, digits: &[Digit]) -> usize
where
    I: IntoIterator<Item = &'a Decoded>,
{
    decoded
        .into_iter()
        .flat_map(|record| record.digits.iter())
        .filter(|digit| digits.contains(digit))
        .count()
}

/// Sum the output values of all records
pub fn sum_values<'a, I>(decoded: I) -> u64
where
    I: IntoIterator<Item = &'a Decoded>,
{
    decoded
        .into_iter()
        .map(Decoded::value)
        .fold(0u64, u64::saturating_add)
}

/// Build a [`Summary`] for a batch
pub fn summarize<'a, I>(decoded: I) -> Summary
where
    I: IntoIterator<Item = &'a Decoded>,
{
    let mut summary = Summary {
        records: 0,
        output_digits: 0,
        total: 0,
        histogram: FxHashMap::default(),
    };

    for record in decoded {
        summary.records += 1;
        summary.output_digits += record.digits.len();
        summary.total = summary.total.saturating_add(record.value());
        for &digit in &record.digits {
            *summary.histogram.entry(digit).or_insert(0) += 1;
        }
    }

    summary
}
