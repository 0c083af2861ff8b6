//! Share identifier generation.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use resumehub_core::config::MAX_SHARE_ID_LENGTH;

/// URL-safe alphabet, 64 symbols.
const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Generates short random share identifiers.
#[derive(Debug)]
pub struct ShareIdGenerator {
    length: usize,
    rng: Mutex<StdRng>,
}

impl ShareIdGenerator {
    /// Creates a generator seeded from the OS.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Creates a generator with a fixed seed, yielding a repeatable sequence.
    pub fn seeded(length: usize, seed: u64) -> Self {
        Self {
            length,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Generates the next identifier.
    pub fn generate(&self) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        (0..self.length)
            .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
            .collect()
    }
}

/// Whether `candidate` could be a share identifier at all.
///
/// Lookups with anything else are answered as not-found without touching
/// the store.
pub fn is_well_formed(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate.len() <= MAX_SHARE_ID_LENGTH
        && candidate.bytes().all(|b| ALPHABET.contains(&b))
}
