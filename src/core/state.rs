//! Game state for one game.
//!
//! ## GameState
//!
//! - Player positions (`None` until a player's first move)
//! - Whose turn it is
//! - The active board topology
//! - Winner, once someone reaches the goal
//! - Move history
//!
//! A state is only ever created fresh or mutated by the move resolver's
//! commit step. Starting over replaces the whole value. Deserialized states
//! go through the same checks: a player on the goal square must be the
//! recorded winner.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::history::MoveRecord;
use super::player::{PlayerId, PlayerMap, PLAYER_COUNT};
use super::square::Square;
use crate::board::BoardTopology;

/// Complete state of a single game.
///
/// Uses an `im` vector for history so snapshots clone in O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateRecord")]
pub struct GameState {
    positions: PlayerMap<Option<Square>>,
    current_player: PlayerId,
    topology: BoardTopology,
    winner: Option<PlayerId>,
    turn_number: u32,
    history: Vector<MoveRecord>,
}

/// Unchecked wire form of `GameState`.
#[derive(Deserialize)]
struct GameStateRecord {
    positions: PlayerMap<Option<Square>>,
    current_player: PlayerId,
    topology: BoardTopology,
    winner: Option<PlayerId>,
    turn_number: u32,
    history: Vector<MoveRecord>,
}

impl TryFrom<GameStateRecord> for GameState {
    type Error = String;

    fn try_from(record: GameStateRecord) -> Result<Self, Self::Error> {
        let mut finishers = record
            .positions
            .iter()
            .filter(|(_, pos)| pos.is_some_and(Square::is_finish))
            .map(|(p, _)| p);
        let finisher = finishers.next();

        if finishers.next().is_some() {
            return Err("both players are on the goal square".to_string());
        }
        drop(finishers);
        if finisher != record.winner {
            return Err(format!(
                "winner {:?} does not match positions (goal reached by {:?})",
                record.winner, finisher
            ));
        }
        if record.turn_number == 0 {
            return Err("turn number starts at 1".to_string());
        }

        Ok(Self {
            positions: record.positions,
            current_player: record.current_player,
            topology: record.topology,
            winner: record.winner,
            turn_number: record.turn_number,
            history: record.history,
        })
    }
}

impl GameState {
    /// Create the canonical start state on the given board.
    ///
    /// ## Defaults
    ///
    /// - both players off the board
    /// - `current_player`: Player 0
    /// - `turn_number`: 1
    #[must_use]
    pub fn new(topology: BoardTopology) -> Self {
        Self {
            positions: PlayerMap::with_default(),
            current_player: PlayerId::FIRST,
            topology,
            winner: None,
            turn_number: 1,
            history: Vector::new(),
        }
    }

    /// Create a mid-game state, e.g. to resume a game or set up a scenario.
    ///
    /// A player already on the goal square is recorded as the winner.
    #[must_use]
    pub fn with_positions(
        topology: BoardTopology,
        positions: [Option<Square>; PLAYER_COUNT],
        current_player: PlayerId,
    ) -> Self {
        let positions = PlayerMap::new(|p| positions[p.index()]);
        let winner = positions
            .iter()
            .find(|(_, pos)| pos.is_some_and(Square::is_finish))
            .map(|(p, _)| p);

        Self {
            positions,
            current_player,
            topology,
            winner,
            turn_number: 1,
            history: Vector::new(),
        }
    }

    /// A player's position. `None` means not started.
    #[must_use]
    pub fn position(&self, player: PlayerId) -> Option<Square> {
        self.positions[player]
    }

    /// Both positions in seat order.
    #[must_use]
    pub fn positions(&self) -> [Option<Square>; PLAYER_COUNT] {
        self.positions.to_array()
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// The board in play.
    #[must_use]
    pub fn topology(&self) -> &BoardTopology {
        &self.topology
    }

    /// Player who reached the goal, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// True once someone has reached the goal.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// Number of the next move (starts at 1).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Every committed move, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// The most recent move.
    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// True before anyone has moved.
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.history.is_empty() && self.positions.iter().all(|(_, pos)| pos.is_none())
    }

    /// Apply a resolved move: position, win check, turn rotation, history.
    pub(crate) fn commit(&mut self, record: MoveRecord) {
        self.positions[record.player] = Some(record.to);

        if record.is_winning() {
            self.winner = Some(record.player);
        } else {
            self.current_player = record.player.other();
        }

        self.turn_number += 1;
        self.history.push_back(record);
    }
}
