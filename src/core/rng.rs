//! Random selection sources.
//!
//! Cell and color picks go through the `RandomSource` trait so a
//! round can be driven deterministically: `GameRng` replays the same
//! sequence for the same seed, and `ScriptedRandom` replays an exact
//! list of picks so tests assert concrete outcomes rather than
//! statistical ones.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Source of uniform random picks.
pub trait RandomSource {
    /// Pick uniformly in `[0, bound)`. `bound` must be non-zero.
    fn pick(&mut self, bound: usize) -> usize;
}

/// Seeded RNG backing normal play.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness. The same seed always produces the same sequence of
/// picks.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn pick(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "Pick bound must be positive");
        self.inner.gen_range(0..bound)
    }
}

/// Replays a fixed sequence of picks.
///
/// Each scripted value is reduced modulo the requested bound; an
/// exhausted script keeps returning 0.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    script: VecDeque<usize>,
}

impl ScriptedRandom {
    /// Create a source replaying the given picks in order.
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Number of scripted picks not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn pick(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "Pick bound must be positive");
        self.script.pop_front().unwrap_or(0) % bound
    }
}
