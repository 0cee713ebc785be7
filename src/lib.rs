//! # snakes-ladders
//!
//! A two-player snakes and ladders engine: board topology, move
//! resolution with overshoot bounce, turn rotation and win detection,
//! behind a session API that a UI or transport layer can call.
//!
//! ## Design Principles
//!
//! 1. **Owned state**: a `GameSession` owns its `GameState`; there is no
//!    global game. Independent sessions never share anything.
//!
//! 2. **Injected randomness**: dice come from a `DiceSource`, the board
//!    generator from a seeded `GameRng`. Same seed, same game.
//!
//! 3. **Total operations**: every valid request has a defined result.
//!    Invalid requests return a `GameError` and change nothing.
//!
//! ## Quick Start
//!
//! ```
//! use snakes_ladders::{GameConfig, GameSession, ScriptedDice};
//!
//! let dice = ScriptedDice::new([4, 3]).unwrap();
//! let mut session = GameSession::with_dice(GameConfig::default(), dice).unwrap();
//!
//! let roll = session.roll_dice();
//! let player = session.get_game_state().current_player;
//! let square = session.move_player(player.into(), roll.into()).unwrap();
//!
//! assert_eq!(square.get(), 4);
//! assert_eq!(session.get_game_state().current_player, 1);
//! ```
//!
//! ## Modules
//!
//! - `core`: squares, players, state, move history, RNG, configuration, errors
//! - `board`: snakes and ladders as one redirect table
//! - `rules`: move resolution and game outcome
//! - `dice`: dice sources
//! - `session`: session manager and serializable state view

pub mod board;
pub mod core;
pub mod dice;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    BoardLayout, GameConfig, GameError, GameRng, GameState, MoveRecord, PlayerId, Square,
    TopologyError, BOARD_SIZE, PLAYER_COUNT,
};

pub use crate::board::{BoardTopology, Redirect, RedirectKind};

pub use crate::rules::{apply_move, resolve_move, GameResult, MoveOutcome};

pub use crate::dice::{DiceSource, RandomDice, ScriptedDice};

pub use crate::session::{GameSession, GameStateView};
