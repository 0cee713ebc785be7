//! Game rules: move resolution and outcome.
//!
//! - `resolver`: overshoot bounce, redirects, commit, turn rotation
//! - `result`: `GameResult` and terminal check

pub mod resolver;
pub mod result;

pub use resolver::{apply_move, bounce, resolve_move, MoveOutcome};
pub use result::{is_terminal, GameResult};
