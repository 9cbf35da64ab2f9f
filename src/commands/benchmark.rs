//! Benchmark command
//!
//! Measures decoder throughput on randomly wired records and checks every
//! result against the wiring it was generated from.

use crate::records::scramble::{GenerateConfig, GeneratedRecord, generate_records};
use crate::solver::decode_record;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_records: usize,
    /// Records that decoded to their generated wiring and digits
    pub correct: usize,
    /// Records that decoded, but to the wrong wiring or digits
    pub mismatched: usize,
    /// Records that failed to decode at all
    pub failed: usize,
    pub duration: Duration,
    pub records_per_second: f64,
}

/// Decode pre-generated records, showing progress when `show_progress` is set
#[must_use]
pub fn run_benchmark(records: &[GeneratedRecord], show_progress: bool) -> BenchmarkResult {
    let pb = if show_progress {
        ProgressBar::new(records.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let mut correct = 0;
    let mut mismatched = 0;
    let mut failed = 0;

    let start = Instant::now();

    for (idx, generated) in records.iter().enumerate() {
        match decode_record(&generated.record) {
            Ok(decoded)
                if decoded.mapping == generated.mapping && decoded.digits == generated.digits =>
            {
                correct += 1;
            }
            Ok(_) => mismatched += 1,
            Err(_) => failed += 1,
        }

        if idx % 1000 == 0 {
            pb.set_message(format!("{failed} failed"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_records = records.len();
    let seconds = duration.as_secs_f64();

    BenchmarkResult {
        total_records,
        correct,
        mismatched,
        failed,
        duration,
        records_per_second: if seconds > 0.0 {
            total_records as f64 / seconds
        } else {
            0.0
        },
    }
}

/// Generate `count` records and benchmark the decoder on them
#[must_use]
pub fn benchmark_generated(count: usize, seed: Option<u64>, show_progress: bool) -> BenchmarkResult {
    let mut config = GenerateConfig::new(count);
    config.seed = seed;
    let records = generate_records(config);
    run_benchmark(&records, show_progress)
}
