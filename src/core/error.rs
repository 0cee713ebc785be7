//! Error types.
//!
//! Every error is a local validation failure: the request is rejected,
//! state is left untouched and the session stays usable.

use thiserror::Error;

use super::player::PlayerId;

/// Errors reported by game operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Player index does not name a seat.
    #[error("invalid player index {0}")]
    InvalidPlayerIndex(i64),

    /// Step count is zero or negative.
    #[error("invalid step count {0}: must be positive")]
    InvalidStepCount(i64),

    /// A move was requested after someone reached the last square.
    #[error("game is finished: {winner} already won")]
    GameFinished {
        /// Player who reached the goal.
        winner: PlayerId,
    },

    /// Strict turn order is on and the wrong player tried to move.
    #[error("action by {actual} but it is {expected}'s turn")]
    OutOfTurn {
        /// Player whose turn it is.
        expected: PlayerId,
        /// Player who tried to move.
        actual: PlayerId,
    },

    /// The board layout breaks a topology invariant.
    #[error("invalid board: {0}")]
    Topology(#[from] TopologyError),

    /// Configuration rejected by `GameConfig::validate`.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Errors raised while building a board topology.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    /// Redirects may only start on squares 2..=99.
    #[error("redirect origin {0} must be between 2 and 99")]
    OriginOutOfRange(u8),

    /// Redirect destination is off the board.
    #[error("redirect destination {0} is off the board")]
    DestinationOutOfRange(u8),

    /// A square redirecting to itself.
    #[error("square {0} redirects to itself")]
    SelfLoop(u8),

    /// The same origin appears twice.
    #[error("square {0} has more than one redirect")]
    DuplicateOrigin(u8),

    /// A destination is itself an origin.
    #[error("redirect {from} -> {to} lands on another redirect")]
    ChainedRedirect {
        /// Origin of the offending redirect.
        from: u8,
        /// Destination that is also an origin.
        to: u8,
    },

    /// The random generator ran out of free squares.
    #[error("could not place {requested} redirects, only {placed} fit")]
    PlacementExhausted {
        /// Redirects asked for.
        requested: usize,
        /// Redirects placed before running out of room.
        placed: usize,
    },
}
