//! Display names for monsters.

use rampage_foundation::MonsterId;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const VOWELS: &[u8] = b"aeiou";
const CONSONANTS: &[u8] = b"bcdfghjklmnpqrstvwxyz";

/// Produces a display name for each new monster.
pub trait MonsterNamer {
    /// Returns the name for the monster with this ID.
    fn name_for(&mut self, id: MonsterId) -> String;
}

impl<F> MonsterNamer for F
where
    F: FnMut(MonsterId) -> String,
{
    fn name_for(&mut self, id: MonsterId) -> String {
        self(id)
    }
}

/// Generates pronounceable names by alternating vowels and consonants.
///
/// Names are not guaranteed unique; they are for display only.
#[derive(Clone, Debug)]
pub struct SyllableNamer {
    rng: ChaCha8Rng,
    length: usize,
}

impl SyllableNamer {
    /// Name length used unless overridden.
    pub const DEFAULT_LENGTH: usize = 8;

    /// Creates a namer from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            length: Self::DEFAULT_LENGTH,
        }
    }

    /// Builder method to set the name length (at least 1).
    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length.max(1);
        self
    }

    fn pick(&mut self, charset: &[u8]) -> char {
        char::from(charset[self.rng.gen_range(0..charset.len())])
    }
}

impl MonsterNamer for SyllableNamer {
    fn name_for(&mut self, _id: MonsterId) -> String {
        let mut name = String::with_capacity(self.length);
        for i in 0..self.length {
            let c = if i % 2 == 0 {
                self.pick(VOWELS)
            } else {
                self.pick(CONSONANTS)
            };
            name.push(if i == 0 { c.to_ascii_uppercase() } else { c });
        }
        name
    }
}
