//! Random number generation for dungeon generation
//!
//! Uses a seeded ChaCha RNG so a seed and a config always reproduce the same level.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Random source for one generated level
///
/// Every sampling call in the generator draws from this handle, so a level
/// is fully determined by its seed and config. Serialized form is the seed
/// alone; deserializing restarts the stream from the beginning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl From<u64> for GameRng {
    fn from(seed: u64) -> Self {
        Self::new(seed)
    }
}

impl From<GameRng> for u64 {
    fn from(rng: GameRng) -> Self {
        rng.seed
    }
}

impl GameRng {
    /// Start a level stream from `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Pick a fresh seed from the OS-backed thread RNG
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed to pass back to [`GameRng::new`] to replay this level
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `lo..=hi`, both ends inclusive.
    ///
    /// Returns `lo` when the range is empty (`hi < lo`).
    pub fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        if hi < lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    /// Uniform count in `lo..=hi` over the full `u32` range.
    ///
    /// Returns `lo` when the range is empty (`hi < lo`).
    pub fn range_u32(&mut self, lo: u32, hi: u32) -> u32 {
        if hi < lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    /// Uniform float in `[0, 1)`
    pub fn random(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }

    /// Returns true with probability `p`
    pub fn chance(&mut self, p: f64) -> bool {
        self.random() < p
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
