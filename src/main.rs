//! Seven-Segment Decoder - CLI
//!
//! Decodes notes from scrambled seven-segment displays, reports statistics
//! over the decoded outputs, and generates or benchmarks random wirings.

use anyhow::Result;
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use segment_decoder::{
    commands::{BatchConfig, EASY_DIGITS, benchmark_generated, run_decode, summarize},
    core::Digit,
    output::{
        print_benchmark_result, print_decode_report, print_digit_count, print_failure,
        print_summary,
    },
    records::{
        EXAMPLE_NOTES, Record,
        loader::{load_from_file, records_from_slice},
        scramble::{GenerateConfig, generate_records},
    },
};

#[derive(Parser)]
#[command(
    name = "segment_decoder",
    about = "Recover scrambled seven-segment wirings and decode their output digits",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Notes: 'example' (default, the ten embedded records) or path to file
    #[arg(short = 'i', long, global = true, default_value = "example")]
    notes: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode every record and print its output value (default)
    Decode {
        /// Show the resolved wiring and the digits as segment art
        #[arg(short, long)]
        verbose: bool,

        /// Report undecodable records and continue instead of aborting
        #[arg(long)]
        skip_invalid: bool,

        /// Decode on a single thread
        #[arg(long)]
        sequential: bool,
    },

    /// Count output digits belonging to a set
    Count {
        /// Digits to count, comma separated
        #[arg(short, long, value_delimiter = ',', default_values_t = EASY_DIGITS)]
        digits: Vec<Digit>,

        /// Skip undecodable records instead of aborting
        #[arg(long)]
        skip_invalid: bool,
    },

    /// Sum the output values of all records
    Sum {
        /// Skip undecodable records instead of aborting
        #[arg(long)]
        skip_invalid: bool,
    },

    /// Print randomly wired records in notes format
    Generate {
        /// Number of records to generate
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Output digits per record
        #[arg(
            short,
            long,
            default_value = "4",
            value_parser = RangedU64ValueParser::<usize>::new().range(1..)
        )]
        outputs: usize,

        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Benchmark the decoder on randomly wired records
    Benchmark {
        /// Number of records to decode
        #[arg(short = 'n', long, default_value = "100000")]
        count: usize,

        /// Seed for reproducible records
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// Load notes based on the -i flag
///
/// - "example": the ten embedded example records
/// - "<path>": records loaded from a file
fn load_notes(notes_mode: &str) -> Result<Vec<Record>> {
    let records = match notes_mode {
        "example" => records_from_slice(EXAMPLE_NOTES)?,
        path => load_from_file(path)?,
    };
    Ok(records)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Decode if no command given
    let command = cli.command.unwrap_or(Commands::Decode {
        verbose: false,
        skip_invalid: false,
        sequential: false,
    });

    match command {
        Commands::Decode {
            verbose,
            skip_invalid,
            sequential,
        } => {
            let config = BatchConfig {
                skip_invalid,
                parallel: !sequential,
            };
            run_decode_command(&cli.notes, config, verbose)
        }
        Commands::Count {
            digits,
            skip_invalid,
        } => run_count_command(&cli.notes, &digits, skip_invalid),
        Commands::Sum { skip_invalid } => run_sum_command(&cli.notes, skip_invalid),
        Commands::Generate {
            count,
            outputs,
            seed,
        } => {
            run_generate_command(count, outputs, seed);
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(count, seed);
            Ok(())
        }
    }
}

fn run_decode_command(notes: &str, config: BatchConfig, verbose: bool) -> Result<()> {
    let records = load_notes(notes)?;
    let report = run_decode(&records, config)?;
    print_decode_report(&report, verbose);
    Ok(())
}

fn run_count_command(notes: &str, digits: &[Digit], skip_invalid: bool) -> Result<()> {
    let records = load_notes(notes)?;
    let config = BatchConfig {
        skip_invalid,
        ..BatchConfig::new()
    };
    let report = run_decode(&records, config)?;
    for failure in &report.failures {
        print_failure(failure);
    }

    let summary = summarize(report.decoded());
    print_digit_count(&summary, digits);
    Ok(())
}

fn run_sum_command(notes: &str, skip_invalid: bool) -> Result<()> {
    let records = load_notes(notes)?;
    let config = BatchConfig {
        skip_invalid,
        ..BatchConfig::new()
    };
    let report = run_decode(&records, config)?;
    for failure in &report.failures {
        print_failure(failure);
    }

    print_summary(&summarize(report.decoded()));
    Ok(())
}

fn run_generate_command(count: usize, outputs: usize, seed: Option<u64>) {
    let config = GenerateConfig {
        count,
        outputs_per_record: outputs,
        seed,
    };
    for generated in generate_records(config) {
        println!("{}", generated.record);
    }
}

fn run_benchmark_command(count: usize, seed: Option<u64>) {
    println!("Running benchmark on {count} randomly wired records...");
    let result = benchmark_generated(count, seed, true);
    print_benchmark_result(&result);
}
