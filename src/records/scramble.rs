//! Scrambled record generation
//!
//! Produces notes for a randomly wired display, so the decoder can be
//! exercised on records whose wiring is known in advance.

use super::Record;
use crate::core::{Digit, Position, Slot, Symbol};
use crate::solver::Mapping;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// A generated record together with the wiring and digits behind it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedRecord {
    pub mapping: Mapping,
    pub digits: Vec<Digit>,
    pub record: Record,
}

/// Settings for [`generate_records`]
#[derive(Debug, Clone, Copy)]
pub struct GenerateConfig {
    pub count: usize,
    pub outputs_per_record: usize,
    pub seed: Option<u64>,
}

impl GenerateConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            count,
            outputs_per_record: 4,
            seed: None,
        }
    }
}

/// Draw a uniformly random wiring
pub fn random_mapping<R: Rng + ?Sized>(rng: &mut R) -> Mapping {
    let mut positions = Position::ALL;
    positions.shuffle(rng);
    Mapping::from_pairs(Symbol::ALL.into_iter().zip(positions))
        .unwrap_or_else(|| unreachable!("a shuffle of all positions is a bijection"))
}

/// Write the notes a display wired by `mapping` would produce
///
/// The ten signal groups come out in random order; `outputs` are encoded in
/// the order given.
pub fn encode_record<R: Rng + ?Sized>(mapping: &Mapping, outputs: &[Digit], rng: &mut R) -> Record {
    let mut signals: Vec<_> = Digit::ALL
        .iter()
        .map(|digit| mapping.encode(digit.positions()))
        .collect();
    signals.shuffle(rng);

    let outputs = outputs
        .iter()
        .map(|digit| mapping.encode(digit.positions()))
        .collect();

    Record::new(signals, outputs)
}

/// Generate one random record with `outputs_per_record` random output digits
///
/// A record needs at least one output group to be readable as notes, so a
/// count of zero is raised to one.
pub fn generate_record<R: Rng + ?Sized>(outputs_per_record: usize, rng: &mut R) -> GeneratedRecord {
    let mapping = random_mapping(rng);
    let digits: Vec<Digit> = (0..outputs_per_record.max(1))
        .filter_map(|_| Digit::new(rng.random_range(0..10)))
        .collect();
    let record = encode_record(&mapping, &digits, rng);

    GeneratedRecord {
        mapping,
        digits,
        record,
    }
}

/// Generate a batch of random records
///
/// With a seed the batch is reproducible; without one it is drawn from
/// operating-system entropy.
#[must_use]
pub fn generate_records(config: GenerateConfig) -> Vec<GeneratedRecord> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    (0..config.count)
        .map(|_| generate_record(config.outputs_per_record, &mut rng))
        .collect()
}
