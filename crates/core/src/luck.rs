//! Deterministic pseudo-random draws keyed by strings.
//!
//! Every draw is a pure function of `(seed, key)`: the key is hashed with
//! xxh3 under the world seed, the hash seeds a ChaCha8 stream, and the first
//! 53 bits of that stream become a float in `[0, 1)`. Distinct keys for the
//! same cell (for example `"4,-2"` and `"4,-2,value"`) give independent draws.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};
use xxhash_rust::xxh3::xxh3_64_with_seed;

use crate::types::Cell;

/// Source of reproducible values in `[0, 1)`.
pub trait Luck {
    fn roll(&self, key: &str) -> f64;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeededLuck {
    seed: u64,
}

impl SeededLuck {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Luck for SeededLuck {
    fn roll(&self, key: &str) -> f64 {
        let mut rng = ChaCha8Rng::seed_from_u64(xxh3_64_with_seed(key.as_bytes(), self.seed));
        unit_interval(rng.next_u64())
    }
}

/// Key used for the spawn decision of a cell.
pub fn spawn_key(cell: Cell) -> String {
    cell.key()
}

/// Key used for the coin-count draw of a cell.
pub fn value_key(cell: Cell) -> String {
    format!("{},value", cell.key())
}

fn unit_interval(bits: u64) -> f64 {
    (bits >> 11) as f64 * (1.0 / (1_u64 << 53) as f64)
}
