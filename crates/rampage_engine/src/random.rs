//! Sources of randomness for the simulation.
//!
//! Destination choice is the only nondeterminism in a run. It goes through
//! [`RandomSource`] so that runs can be seeded or scripted.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform choice among `len` candidates.
pub trait RandomSource {
    /// Returns an index in `0..len`, each with equal probability.
    ///
    /// Callers never pass `len == 0`.
    fn choose_index(&mut self, len: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn choose_index(&mut self, len: usize) -> usize {
        (**self).choose_index(len)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn choose_index(&mut self, len: usize) -> usize {
        (**self).choose_index(len)
    }
}

/// ChaCha8-backed random source; the same seed yields the same choices.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: ChaCha8Rng,
    seed: u64,
}

impl SeededRandom {
    /// Creates a source from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed this source was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn choose_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "choose_index called with no candidates");
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed list of choices, then always picks the first candidate.
///
/// Each scripted pick is reduced modulo the candidate count.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    picks: VecDeque<usize>,
}

impl ScriptedRandom {
    /// Creates a source that replays `picks` in order.
    #[must_use]
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }

    /// Returns how many scripted picks are left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.picks.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn choose_index(&mut self, len: usize) -> usize {
        self.picks.pop_front().map_or(0, |pick| pick % len.max(1))
    }
}
