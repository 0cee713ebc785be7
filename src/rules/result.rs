//! Game outcome.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;
use crate::core::state::GameState;

/// Result of a completed game.
///
/// A race to the goal cannot be drawn, so the only outcome is a winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// First player to reach the goal.
    Winner(PlayerId),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
        }
    }
}

/// Check if the game is over.
///
/// Returns `Some(result)` if the game has ended, `None` if it continues.
#[must_use]
pub fn is_terminal(state: &GameState) -> Option<GameResult> {
    state.winner().map(GameResult::Winner)
}
