//! Command implementations

pub mod benchmark;
pub mod decode;
pub mod summary;

pub use benchmark::{BenchmarkResult, benchmark_generated, run_benchmark};
pub use decode::{BatchConfig, DecodeReport, RecordFailure, decode_all, run_decode};
pub use summary::{EASY_DIGITS, Summary, count_digits, sum_values, summarize};
