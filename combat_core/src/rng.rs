//! Seeded RNG - reproducible random streams for gameplay rolls
//!
//! Every battle is driven from a single 32-bit seed. Independent streams
//! (gameplay rolls, cosmetic jitter, ...) are derived with [`SeededRng::fork`],
//! which keys a new stream on the root seed and a label, so drawing from one
//! stream never shifts another.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Deterministic float source seeded by an integer
#[derive(Debug, Clone)]
pub struct SeededRng {
    seed: u32,
    inner: ChaCha8Rng,
}

impl SeededRng {
    /// Create a stream from a seed. The same seed always yields the same sequence.
    pub fn new(seed: u32) -> Self {
        SeededRng {
            seed,
            inner: ChaCha8Rng::seed_from_u64(u64::from(seed)),
        }
    }

    /// The seed this stream was created from
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Next value in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Roll against a percentage chance (0-100).
    ///
    /// Always consumes exactly one value so the stream position does not
    /// depend on the chance being rolled.
    pub fn roll_percent(&mut self, percent: f64) -> bool {
        let roll = self.next_f64();
        if !percent.is_finite() || percent <= 0.0 {
            return false;
        }
        roll < percent / 100.0
    }

    /// Derive an independent stream keyed by `label`.
    ///
    /// The fork depends only on the root seed and the label, not on how many
    /// values have been drawn from `self`.
    pub fn fork(&self, label: &str) -> SeededRng {
        SeededRng::new(fork_seed(self.seed, label))
    }
}

impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

/// FNV-1a over the seed bytes followed by the label bytes
fn fork_seed(seed: u32, label: &str) -> u32 {
    seed.to_le_bytes()
        .iter()
        .chain(label.as_bytes())
        .fold(FNV_OFFSET_BASIS, |hash, byte| {
            (hash ^ u32::from(*byte)).wrapping_mul(FNV_PRIME)
        })
}
