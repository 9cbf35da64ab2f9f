//! Seven-Segment Decoder
//!
//! Recovers the scrambled wiring of a seven-segment display from the ten
//! digit patterns it shows, then reads its output digits.
//!
//! # Quick Start
//!
//! ```rust
//! use segment_decoder::records::Record;
//! use segment_decoder::solver::decode_record;
//!
//! let record: Record = "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf"
//!     .parse()
//!     .unwrap();
//!
//! let decoded = decode_record(&record).unwrap();
//! assert_eq!(decoded.value(), 5353);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Wiring recovery and decoding
pub mod solver;

// Notes parsing, loading and generation
pub mod records;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
