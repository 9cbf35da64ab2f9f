//! A single line of display notes

use crate::core::Group;
use crate::error::RecordError;
use std::fmt;
use std::str::FromStr;

/// Signal and output groups observed on one display
///
/// Written as `<signal groups> | <output groups>`, groups separated by
/// whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub signals: Vec<Group>,
    pub outputs: Vec<Group>,
}

impl Record {
    #[must_use]
    pub const fn new(signals: Vec<Group>, outputs: Vec<Group>) -> Self {
        Self { signals, outputs }
    }
}

fn parse_groups(text: &str) -> Result<Vec<Group>, RecordError> {
    text.split_whitespace().map(str::parse).collect()
}

impl FromStr for Record {
    type Err = RecordError;

    /// Parse one line of notes
    ///
    /// # Examples
    /// ```
    /// use segment_decoder::records::Record;
    ///
    /// let record: Record = "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf"
    ///     .parse()
    ///     .unwrap();
    /// assert_eq!(record.signals.len(), 10);
    /// assert_eq!(record.outputs.len(), 4);
    /// ```
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (signals, outputs) = line.split_once('|').ok_or(RecordError::MissingDelimiter)?;

        let signals = parse_groups(signals)?;
        if signals.is_empty() {
            return Err(RecordError::NoSignals);
        }

        let outputs = parse_groups(outputs)?;
        if outputs.is_empty() {
            return Err(RecordError::NoOutputs);
        }

        Ok(Self { signals, outputs })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |groups: &[Group]| -> String {
            groups
                .iter()
                .map(|group| group.letters())
                .collect::<Vec<_>>()
                .join(" ")
        };
        write!(f, "{} | {}", join(&self.signals), join(&self.outputs))
    }
}
