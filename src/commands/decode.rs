//! Batch decoding command
//!
//! Decodes every record of a set of notes, either aborting on the first
//! failure or collecting failures alongside the decoded records.

use crate::error::DecodeError;
use crate::records::Record;
use crate::solver::{Decoded, decode_record};
use rayon::prelude::*;
use thiserror::Error;

/// Configuration for a batch decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
    /// Keep going past records that fail to decode
    pub skip_invalid: bool,
    /// Decode records on the rayon thread pool
    pub parallel: bool,
}

impl BatchConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            skip_invalid: false,
            parallel: true,
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A record that could not be decoded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("record {}: {error}", .index + 1)]
pub struct RecordFailure {
    /// Zero-based position of the record in the batch
    pub index: usize,
    #[source]
    pub error: DecodeError,
}

/// Outcome of a batch decode
#[derive(Debug, Clone, Default)]
pub struct DecodeReport {
    /// Decoded records with their batch index, in input order
    pub decoded: Vec<(usize, Decoded)>,
    /// Records skipped because they failed to decode
    pub failures: Vec<RecordFailure>,
}

impl DecodeReport {
    /// Decoded records without their indices
    pub fn decoded(&self) -> impl Iterator<Item = &Decoded> {
        self.decoded.iter().map(|(_, decoded)| decoded)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.decoded.len() + self.failures.len()
    }
}

/// Decode every record independently, preserving input order
///
/// Records share no state, so the parallel and sequential paths give
/// identical results.
#[must_use]
pub fn decode_all(records: &[Record], parallel: bool) -> Vec<Result<Decoded, DecodeError>> {
    if parallel {
        records.par_iter().map(decode_record).collect()
    } else {
        records.iter().map(decode_record).collect()
    }
}

/// Decode a batch of records according to `config`
///
/// # Errors
///
/// Unless `config.skip_invalid` is set, returns the first failing record
/// (lowest index) as a `RecordFailure`.
pub fn run_decode(records: &[Record], config: BatchConfig) -> Result<DecodeReport, RecordFailure> {
    let mut report = DecodeReport::default();

    for (index, result) in decode_all(records, config.parallel).into_iter().enumerate() {
        match result {
            Ok(decoded) => report.decoded.push((index, decoded)),
            Err(error) if config.skip_invalid => {
                report.failures.push(RecordFailure { index, error });
            }
            Err(error) => return Err(RecordFailure { index, error }),
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::EXAMPLE_NOTES;
    use crate::records::loader::records_from_slice;

    fn examples() -> Vec<Record> {
        records_from_slice(EXAMPLE_NOTES).unwrap()
    }

    fn broken() -> Record {
        // no length-4 signal group
        "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb cagedb ab | ab"
            .parse()
            .unwrap()
    }

    #[test]
    fn decodes_every_example() {
        let report = run_decode(&examples(), BatchConfig::new()).unwrap();
        let values: Vec<u64> = report.decoded().map(Decoded::value).collect();
        assert_eq!(
            values,
            vec![8394, 9781, 1197, 9361, 4873, 8418, 4548, 1625, 8717, 4315]
        );
        assert!(report.failures.is_empty());
        assert_eq!(report.total(), 10);
    }

    #[test]
    fn parallel_matches_sequential() {
        let records = examples();
        assert_eq!(decode_all(&records, true), decode_all(&records, false));
    }

    #[test]
    fn first_failure_aborts_by_default() {
        let mut records = examples();
        records.insert(3, broken());
        records.push(broken());

        let failure = run_decode(&records, BatchConfig::new()).unwrap_err();
        assert_eq!(failure.index, 3);
        assert_eq!(
            failure.error,
            DecodeError::MalformedRecord {
                length: 4,
                found: 0
            }
        );
        assert!(failure.to_string().starts_with("record 4: malformed record"));
    }

    #[test]
    fn skip_invalid_collects_failures() {
        let mut records = examples();
        records.insert(0, broken());

        let config = BatchConfig {
            skip_invalid: true,
            parallel: false,
        };
        let report = run_decode(&records, config).unwrap();

        assert_eq!(report.decoded.len(), 10);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].index, 0);
        assert_eq!(report.decoded[0].0, 1);
    }

    #[test]
    fn empty_batch() {
        let report = run_decode(&[], BatchConfig::new()).unwrap();
        assert_eq!(report.total(), 0);
    }
}
