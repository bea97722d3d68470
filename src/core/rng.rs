//! Seeded randomness for puzzle generation.
//!
//! A session keeps one root `PuzzleRng` and forks a fresh stream for every
//! round. Forking only bumps a counter on the root, so a root checkpoint
//! (`state()`) is enough to replay every round that follows it.
//!
//! ```
//! use number_pyramid::core::PuzzleRng;
//!
//! let mut root = PuzzleRng::new(42);
//! let checkpoint = root.state();
//!
//! let first = root.fork().gen_range(1..=1000);
//! let replayed = PuzzleRng::from_state(&checkpoint).fork().gen_range(1..=1000);
//! assert_eq!(first, replayed);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Golden-ratio increment spreading fork seeds across the `u64` space.
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// ChaCha8 stream injected into the generator.
#[derive(Clone, Debug)]
pub struct PuzzleRng {
    stream: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl PuzzleRng {
    /// Create a stream from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// Create a stream from an OS-random seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive the next child stream.
    ///
    /// The n-th fork of a given seed is always the same stream, whatever
    /// this stream has drawn in the meantime.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STRIDE)))
    }

    /// Uniform integer in an inclusive range.
    pub fn gen_range(&mut self, range: std::ops::RangeInclusive<i64>) -> i64 {
        self.stream.gen_range(range)
    }

    /// `true` with the given probability, clamped to `[0, 1]`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.stream.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Fisher-Yates shuffle in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.stream);
    }

    /// Uniform pick, `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.stream)
    }

    /// Checkpoint this stream.
    #[must_use]
    pub fn state(&self) -> PuzzleRngState {
        PuzzleRngState {
            seed: self.seed,
            word_pos: self.stream.get_word_pos(),
            forks: self.forks,
        }
    }

    /// Resume a checkpointed stream.
    #[must_use]
    pub fn from_state(state: &PuzzleRngState) -> Self {
        let mut stream = ChaCha8Rng::seed_from_u64(state.seed);
        stream.set_word_pos(state.word_pos);
        Self {
            stream,
            seed: state.seed,
            forks: state.forks,
        }
    }
}

/// Serializable checkpoint of a `PuzzleRng`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleRngState {
    /// Starting seed.
    pub seed: u64,
    /// Position in the ChaCha8 keystream.
    pub word_pos: u128,
    /// Forks taken so far.
    pub forks: u64,
}
