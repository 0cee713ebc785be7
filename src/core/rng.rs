//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical boards and dice
//! - **Context streams**: Independent sequences for board generation and dice
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use snakes_ladders::core::GameRng;
//!
//! let rng = GameRng::new(42);
//!
//! // Board layout and dice draw from separate streams, so changing how
//! // many numbers the board consumes never shifts the dice sequence.
//! let mut board = rng.for_context("topology");
//! let mut dice = rng.for_context("dice");
//!
//! let mut again = GameRng::new(42).for_context("dice");
//! assert_eq!(dice.roll_die(), again.roll_die());
//! # let _ = board.gen_range(1..100);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Number of faces on the die.
pub const DIE_FACES: u8 = 6;

/// Golden-ratio increment used to spread context hashes across the seed space.
const CONTEXT_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// 64-bit FNV-1a over the context name. Fixed algorithm, so context seeds
/// do not depend on the toolchain.
fn context_hash(context: &str) -> u64 {
    context.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(0x0000_0100_0000_01b3)
    })
}

/// Deterministic RNG backed by ChaCha8.
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

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed,
    /// on every platform and Rust release.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let context_seed = self
            .seed
            .wrapping_add(context_hash(context).wrapping_mul(CONTEXT_MIX));
        Self::new(context_seed)
    }

    /// Generate a random integer in the given range.
    pub fn gen_range(&mut self, range: std::ops::Range<u8>) -> u8 {
        self.inner.gen_range(range)
    }

    /// Roll one fair die: uniform in `1..=DIE_FACES`.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many rolls have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
