//! Scripted dice for tests and replays.

use super::DiceSource;
use crate::core::error::GameError;
use crate::core::rng::DIE_FACES;

/// Replays a fixed sequence of rolls, starting over when it runs out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedDice {
    rolls: Vec<u8>,
    next: usize,
}

impl ScriptedDice {
    /// Build from a non-empty sequence of values in `1..=6`.
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Result<Self, GameError> {
        let rolls: Vec<u8> = rolls.into_iter().collect();

        if rolls.is_empty() {
            return Err(GameError::InvalidConfig("dice script is empty".to_string()));
        }
        if let Some(bad) = rolls.iter().find(|r| !(1..=DIE_FACES).contains(*r)) {
            return Err(GameError::InvalidConfig(format!(
                "dice script value {} is not a die face",
                bad
            )));
        }

        Ok(Self { rolls, next: 0 })
    }

    /// Number of rolls made so far.
    #[must_use]
    pub fn rolls_made(&self) -> usize {
        self.next
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> u8 {
        let value = self.rolls[self.next % self.rolls.len()];
        self.next += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_in_order_and_cycles() {
        let mut dice = ScriptedDice::new([1, 6, 3]).unwrap();
        let rolls: Vec<_> = (0..7).map(|_| dice.roll()).collect();

        assert_eq!(rolls, vec![1, 6, 3, 1, 6, 3, 1]);
        assert_eq!(dice.rolls_made(), 7);
    }

    #[test]
    fn test_rejects_empty_script() {
        assert!(matches!(
            ScriptedDice::new(Vec::new()),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_non_faces() {
        assert!(ScriptedDice::new([3, 0]).is_err());
        assert!(ScriptedDice::new([7]).is_err());
    }
}
