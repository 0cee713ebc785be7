//! Dice sources.
//!
//! The engine never rolls on its own; it asks a `DiceSource`. Production
//! code uses `RandomDice`, tests and replays use `ScriptedDice`.
//!
//! ## Implementing a source
//!
//! ```
//! use snakes_ladders::dice::DiceSource;
//!
//! /// Always rolls a six.
//! struct Loaded;
//!
//! impl DiceSource for Loaded {
//!     fn roll(&mut self) -> u8 {
//!         6
//!     }
//! }
//!
//! assert_eq!(Loaded.roll(), 6);
//! ```

mod scripted;

pub use scripted::ScriptedDice;

use crate::core::rng::GameRng;

/// Produces die values in `1..=6`.
///
/// Draws are independent: a source must not make one roll depend on the
/// outcome of a previous move.
pub trait DiceSource {
    /// Roll once.
    fn roll(&mut self) -> u8;
}

impl<D: DiceSource + ?Sized> DiceSource for Box<D> {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

/// Uniform die backed by a seedable `GameRng`.
#[derive(Clone, Debug)]
pub struct RandomDice {
    rng: GameRng,
}

impl RandomDice {
    /// Dice drawing from the given stream.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Dice with a fixed seed, for reproducible games.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Dice seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(GameRng::from_entropy())
    }

    /// The underlying stream, e.g. to checkpoint it.
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }
}

impl DiceSource for RandomDice {
    fn roll(&mut self) -> u8 {
        self.rng.roll_die()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::DIE_FACES;

    #[test]
    fn test_random_dice_range() {
        let mut dice = RandomDice::seeded(3);
        for _ in 0..500 {
            let value = dice.roll();
            assert!((1..=DIE_FACES).contains(&value));
        }
    }

    #[test]
    fn test_random_dice_seeded_replay() {
        let mut a = RandomDice::seeded(11);
        let mut b = RandomDice::seeded(11);

        let seq_a: Vec<_> = (0..30).map(|_| a.roll()).collect();
        let seq_b: Vec<_> = (0..30).map(|_| b.roll()).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn test_random_dice_roughly_uniform() {
        let mut dice = RandomDice::seeded(2024);
        let mut counts = [0u32; DIE_FACES as usize];

        for _ in 0..6000 {
            counts[(dice.roll() - 1) as usize] += 1;
        }

        for count in counts {
            assert!((800..=1200).contains(&count), "face count {} far from 1000", count);
        }
    }

    #[test]
    fn test_boxed_source() {
        let mut dice: Box<dyn DiceSource> = Box::new(ScriptedDice::new([2, 5]).unwrap());
        assert_eq!(dice.roll(), 2);
        assert_eq!(dice.roll(), 5);
    }
}
