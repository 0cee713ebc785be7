//! Core engine types: squares, players, state, move records, RNG,
//! configuration and errors.

pub mod config;
pub mod error;
pub mod history;
pub mod player;
pub mod rng;
pub mod square;
pub mod state;

pub use config::{BoardLayout, GameConfig, MAX_RANDOM_REDIRECTS};
pub use error::{GameError, TopologyError};
pub use history::MoveRecord;
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState, DIE_FACES};
pub use square::{Square, BOARD_SIZE};
pub use state::GameState;
