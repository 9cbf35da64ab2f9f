//! Notes loading utilities
//!
//! Parses records from text, files, or the embedded examples.

use super::Record;
use crate::error::RecordError;
use std::fs;
use std::path::Path;

/// Parse every non-blank line of `text` as a record
///
/// # Errors
///
/// Returns `RecordError::Line` naming the first line (1-based) that fails
/// to parse.
///
/// # Examples
/// ```
/// use segment_decoder::records::loader::records_from_str;
///
/// let text = "ab abc | ab\n\nabcd abcdefg | abc\n";
/// let records = records_from_str(text).unwrap();
/// assert_eq!(records.len(), 2);
/// ```
pub fn records_from_str(text: &str) -> Result<Vec<Record>, RecordError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            line.parse::<Record>().map_err(|source| RecordError::Line {
                line: i + 1,
                source: Box::new(source),
            })
        })
        .collect()
}

/// Load records from a file
///
/// # Errors
///
/// Returns `RecordError::Io` if the file cannot be read, or the parse error
/// of the first malformed line.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Record>, RecordError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| RecordError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    records_from_str(&content)
}

/// Convert embedded lines to records
///
/// # Errors
///
/// Returns the parse error of the first malformed line.
pub fn records_from_slice(lines: &[&str]) -> Result<Vec<Record>, RecordError> {
    records_from_str(&lines.join("\n"))
}
