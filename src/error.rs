//! Error types for parsing notes and decoding records

use crate::core::{Group, PositionSet, Symbol};
use std::fmt::Write;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to recover a wiring or decode an output group
///
/// Every variant is final for the record it came from: decoding is
/// deterministic, so retrying cannot change the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A digit with a unique segment count (2, 3, 4 or 7) is missing or repeated
    /// among the signal groups
    #[error("malformed record: expected one signal group of length {length}, found {found}")]
    MalformedRecord { length: usize, found: usize },

    /// Propagation stopped without a unique position for every symbol
    #[error("unresolved wiring: {}", describe_candidates(.unresolved))]
    Resolution {
        unresolved: Vec<(Symbol, PositionSet)>,
    },

    /// An output group translated to a position set that is not a digit
    #[error("output group '{}' lights {positions}, which is not a digit", .group.letters())]
    UnknownDigit {
        group: Group,
        positions: PositionSet,
    },
}

fn describe_candidates(unresolved: &[(Symbol, PositionSet)]) -> String {
    let mut out = String::new();
    for (i, (symbol, candidates)) in unresolved.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{symbol} -> {candidates}");
    }
    out
}

/// Failure to read or parse the notes
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("missing '|' between signal and output groups")]
    MissingDelimiter,

    #[error("invalid symbol '{0}' (expected a-g)")]
    InvalidSymbol(char),

    #[error("symbol '{0}' repeated within one group")]
    DuplicateSymbol(Symbol),

    #[error("empty group")]
    EmptyGroup,

    #[error("record has no signal groups")]
    NoSignals,

    #[error("record has no output groups")]
    NoOutputs,

    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<RecordError>,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Position, PositionSet};

    #[test]
    fn malformed_record_message() {
        let err = DecodeError::MalformedRecord {
            length: 4,
            found: 0,
        };
        assert_eq!(
            err.to_string(),
            "malformed record: expected one signal group of length 4, found 0"
        );
    }

    #[test]
    fn resolution_message_lists_candidates() {
        let both: PositionSet = [Position::Middle, Position::Bottom].into_iter().collect();
        let err = DecodeError::Resolution {
            unresolved: vec![(Symbol::D, both), (Symbol::G, PositionSet::empty())],
        };
        assert_eq!(
            err.to_string(),
            "unresolved wiring: d -> {middle, bottom}, g -> {}"
        );
    }

    #[test]
    fn unknown_digit_message() {
        let group: Group = "bdc".parse().unwrap();
        let err = DecodeError::UnknownDigit {
            group,
            positions: PositionSet::single(Position::Top),
        };
        assert_eq!(
            err.to_string(),
            "output group 'bcd' lights {top}, which is not a digit"
        );
    }

    #[test]
    fn line_error_wraps_source() {
        let err = RecordError::Line {
            line: 3,
            source: Box::new(RecordError::MissingDelimiter),
        };
        assert_eq!(
            err.to_string(),
            "line 3: missing '|' between signal and output groups"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
