//! Display functions for command results

use super::formatters::{create_progress_bar, format_digits, mapping_table, render_digits};
use crate::commands::{BenchmarkResult, DecodeReport, RecordFailure, Summary};
use crate::core::Digit;
use colored::Colorize;

/// Print every decoded record, plus its wiring and digit art when `verbose`
pub fn print_decode_report(report: &DecodeReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Decoded {} of {} records",
        report.decoded.len().to_string().bright_yellow().bold(),
        report.total()
    );
    println!("{}", "─".repeat(60).cyan());

    for (index, decoded) in &report.decoded {
        println!(
            "\nRecord {:>4}: {}  →  {}",
            index + 1,
            format_digits(&decoded.digits),
            decoded.value().to_string().green().bold()
        );

        if verbose {
            for line in mapping_table(&decoded.mapping) {
                println!("  {}", line.bright_black());
            }
            for row in render_digits(&decoded.digits).lines() {
                println!("  {}", row.bright_cyan());
            }
        }
    }

    if !report.failures.is_empty() {
        println!();
        for failure in &report.failures {
            print_failure(failure);
        }
    }
}

/// Report a record that could not be decoded
pub fn print_failure(failure: &RecordFailure) {
    eprintln!("{} {failure}", "✗".red().bold());
}

/// Print how many output digits fall in `digits`
pub fn print_digit_count(summary: &Summary, digits: &[Digit]) {
    let listed = format_digits(digits);
    println!(
        "\nOutput digits in {{{}}}: {}",
        listed,
        summary.count_of(digits).to_string().bright_yellow().bold()
    );
}

/// Print totals and the digit distribution of a batch
pub fn print_summary(summary: &Summary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SUMMARY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Records:        {}", summary.records);
    println!("   Output digits:  {}", summary.output_digits);
    println!(
        "   Sum of values:  {}",
        summary.total.to_string().bright_yellow().bold()
    );

    if summary.output_digits == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for digit in Digit::ALL {
        let count = summary.histogram.get(&digit).copied().unwrap_or(0);
        let pct = (count as f64 / summary.output_digits as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {digit}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Records decoded:  {}", result.total_records);
    println!(
        "   Correct:          {}",
        result.correct.to_string().green()
    );
    if result.mismatched > 0 {
        println!(
            "   Mismatched:       {}",
            result.mismatched.to_string().red().bold()
        );
    }
    if result.failed > 0 {
        println!("   Failed:           {}", result.failed.to_string().red().bold());
    }
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());
    println!(
        "   Records/second:   {}",
        format!("{:.0}", result.records_per_second)
            .bright_yellow()
            .bold()
    );
}
