//! Display notes: parsing, loading and generation
//!
//! Provides the embedded example notes alongside file loading and a
//! generator of randomly wired records.

mod embedded;
pub mod loader;
mod record;
pub mod scramble;

pub use embedded::{CANONICAL_EXAMPLE, EXAMPLE_NOTES};
pub use record::Record;
