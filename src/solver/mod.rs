//! Wiring recovery and output decoding
//!
//! The analyzer seeds candidate positions for every symbol, the resolver
//! narrows them to a single bijection, and the engine reads output digits
//! through that bijection.

pub mod analyzer;
mod candidates;
mod engine;
mod mapping;
pub mod resolver;

pub use analyzer::{Analysis, KnownGroups, analyze};
pub use candidates::Candidates;
pub use engine::{
    Decoded, decode_group, decode_outputs, decode_record, digits_to_value, solve_wiring,
};
pub use mapping::Mapping;
pub use resolver::resolve;
