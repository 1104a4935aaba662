//! Deterministic seeded RNG wrapper.
//!
//! Nothing in the tick loop is random; `SimRng` exists for map generation
//! (scattering walls over an open grid) and for randomised-but-reproducible
//! test fixtures.  The same seed always yields the same sequence.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation-level RNG.
///
/// Used only in single-threaded contexts.  Derive independent streams with
/// [`stream`](Self::stream) rather than sharing one instance.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent `SimRng` stream seeded from this one and `index`.
    pub fn stream(&mut self, index: u64) -> SimRng {
        let seed: u64 = self.0.r#gen::<u64>() ^ index.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
