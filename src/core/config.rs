//! Game configuration.
//!
//! Board size and seat count are fixed by the rules; what a game may
//! choose is the board layout, the seed, and how strictly turn order is
//! enforced.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use crate::board::BoardTopology;

/// Upper bound for each redirect count on a random board.
pub const MAX_RANDOM_REDIRECTS: u8 = 12;

/// Which board to play on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardLayout {
    /// The fixed curated board. Same squares every game.
    #[default]
    Classic,
    /// A freshly generated board for every new game.
    Random {
        /// Number of snakes.
        snakes: u8,
        /// Number of ladders.
        ladders: u8,
    },
    /// Caller-supplied `(origin, destination)` pairs.
    Custom(Vec<(u8, u8)>),
}

/// Session configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for board generation and dice.
    /// `None` draws a seed from OS entropy.
    pub seed: Option<u64>,

    /// Board layout.
    pub layout: BoardLayout,

    /// Reject moves by the player whose turn it is not.
    /// Off by default: callers normally pass the current player anyway.
    pub strict_turns: bool,
}

impl GameConfig {
    /// Create a new config with a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with a board layout.
    #[must_use]
    pub fn with_layout(mut self, layout: BoardLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Create a new config with strict turn order on or off.
    #[must_use]
    pub fn with_strict_turns(mut self, strict: bool) -> Self {
        self.strict_turns = strict;
        self
    }

    /// Check the layout can always be built.
    ///
    /// Random boards are capped so the generator never runs out of room.
    pub fn validate(&self) -> Result<(), GameError> {
        match &self.layout {
            BoardLayout::Classic => Ok(()),
            BoardLayout::Random { snakes, ladders } => {
                let range = 1..=MAX_RANDOM_REDIRECTS;
                if range.contains(snakes) && range.contains(ladders) {
                    Ok(())
                } else {
                    Err(GameError::InvalidConfig(format!(
                        "random board needs 1..={} snakes and ladders, got {} and {}",
                        MAX_RANDOM_REDIRECTS, snakes, ladders
                    )))
                }
            }
            BoardLayout::Custom(pairs) => {
                BoardTopology::from_pairs(pairs.iter().copied())?;
                Ok(())
            }
        }
    }
}
