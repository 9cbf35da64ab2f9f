//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_decode_report, print_digit_count, print_failure, print_summary,
};
