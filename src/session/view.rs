//! Read-only snapshot of a game for callers that render or transmit it.

use serde::{Deserialize, Serialize};

use crate::core::player::PLAYER_COUNT;
use crate::core::state::GameState;

/// Plain-data view of a game.
///
/// Serializes with camelCase keys:
/// `{"players":[null,4],"currentPlayer":0,"snakesAndLadders":[[3,22],...]}`.
/// `winner` is only present once the game is over.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateView {
    /// Square per seat, `None` before a player's first move.
    pub players: [Option<u8>; PLAYER_COUNT],
    /// Seat index whose turn it is.
    pub current_player: u8,
    /// `(origin, destination)` pairs sorted by origin.
    pub snakes_and_ladders: Vec<(u8, u8)>,
    /// Seat index of the winner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<u8>,
}

impl From<&GameState> for GameStateView {
    fn from(state: &GameState) -> Self {
        Self {
            players: state.positions().map(|pos| pos.map(|s| s.get())),
            current_player: state.current_player().index() as u8,
            snakes_and_ladders: state.topology().pairs(),
            winner: state.winner().map(|p| p.index() as u8),
        }
    }
}
