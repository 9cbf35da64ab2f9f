//! Formatting utilities for terminal output

use crate::core::{Digit, Position};
use crate::solver::Mapping;

/// Render digits as three rows of seven-segment art
///
/// Each digit is three characters wide, separated by a space.
#[must_use]
pub fn render_digits(digits: &[Digit]) -> String {
    let mut rows = [String::new(), String::new(), String::new()];

    for (i, digit) in digits.iter().enumerate() {
        let lit = digit.positions();
        let seg = |position: Position, on: char| if lit.contains(position) { on } else { ' ' };

        if i > 0 {
            for row in &mut rows {
                row.push(' ');
            }
        }

        rows[0].extend([' ', seg(Position::Top, '_'), ' ']);
        rows[1].extend([
            seg(Position::UpperLeft, '|'),
            seg(Position::Middle, '_'),
            seg(Position::UpperRight, '|'),
        ]);
        rows[2].extend([
            seg(Position::LowerLeft, '|'),
            seg(Position::Bottom, '_'),
            seg(Position::LowerRight, '|'),
        ]);
    }

    rows.join("\n")
}

/// Digits separated by spaces, e.g. `5 3 5 3`
#[must_use]
pub fn format_digits(digits: &[Digit]) -> String {
    digits
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// One `symbol → position` line per symbol
#[must_use]
pub fn mapping_table(mapping: &Mapping) -> Vec<String> {
    mapping
        .iter()
        .map(|(symbol, position)| format!("{symbol} → {} ({position})", position.label()))
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Slot;

    #[test]
    fn render_eight() {
        assert_eq!(render_digits(&[Digit::EIGHT]), " _ \n|_|\n|_|");
    }

    #[test]
    fn render_one_and_seven() {
        let art = render_digits(&[Digit::ONE, Digit::SEVEN]);
        assert_eq!(art, "     _ \n  |   |\n  |   |");
    }

    #[test]
    fn render_empty() {
        assert_eq!(render_digits(&[]), "\n\n");
    }

    #[test]
    fn digits_joined() {
        let digits = [Digit::FIVE, Digit::THREE, Digit::FIVE, Digit::THREE];
        assert_eq!(format_digits(&digits), "5 3 5 3");
    }

    #[test]
    fn mapping_table_lists_every_symbol() {
        let mapping = Mapping::new(Position::ALL).unwrap();
        let table = mapping_table(&mapping);
        assert_eq!(table.len(), 7);
        assert_eq!(table[0], "a → a (top)");
        assert_eq!(table[6], "g → g (bottom)");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
