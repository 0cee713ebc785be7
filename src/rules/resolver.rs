//! Move resolution.
//!
//! A move goes through these steps in order:
//!
//! 1. `target = position + steps`, where not started counts as 0
//! 2. past the goal, reflect: `target = 200 - target`, clamped to square 1
//! 3. apply at most one redirect on the landing square
//! 4. commit, then either record the win or hand the turn over
//!
//! `resolve_move` does steps 1-3 without touching state, so callers can
//! preview a roll. `apply_move` validates, resolves and commits.

use tracing::{debug, info};

use crate::board::{BoardTopology, RedirectKind};
use crate::core::error::GameError;
use crate::core::history::MoveRecord;
use crate::core::player::PlayerId;
use crate::core::square::{Square, BOARD_SIZE};
use crate::core::state::GameState;

/// Result of resolving a move, before it is committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Square reached after overshoot, before any redirect.
    pub landed: Square,
    /// Final square.
    pub to: Square,
    /// The raw target was past the goal.
    pub bounced: bool,
    /// Redirect taken on `landed`, if any.
    pub redirect: Option<RedirectKind>,
}

/// Landing square for a raw target, bouncing off the goal.
///
/// Returns the square and whether a bounce happened. Targets far enough
/// past the goal to reflect below the board stop on square 1.
///
/// ```
/// use snakes_ladders::rules::bounce;
///
/// assert_eq!(bounce(103), (snakes_ladders::core::Square::new(97).unwrap(), true));
/// assert_eq!(bounce(100).0.get(), 100);
/// assert_eq!(bounce(250).0.get(), 1);
/// ```
#[must_use]
pub fn bounce(target: u64) -> (Square, bool) {
    let goal = u64::from(BOARD_SIZE);
    if target > goal {
        let reflected = (2 * goal).saturating_sub(target);
        (Square::clamped(reflected), true)
    } else {
        (Square::clamped(target), false)
    }
}

/// Compute where a move ends without changing any state.
#[must_use]
pub fn resolve_move(topology: &BoardTopology, from: Option<Square>, steps: u64) -> MoveOutcome {
    let target = Square::ordinal(from).saturating_add(steps);
    let (landed, bounced) = bounce(target);

    match topology.redirect_at(landed) {
        Some(redirect) => MoveOutcome {
            landed,
            to: redirect.to,
            bounced,
            redirect: Some(redirect.kind),
        },
        None => MoveOutcome {
            landed,
            to: landed,
            bounced,
            redirect: None,
        },
    }
}

/// Validate, resolve and commit a move for `player`.
///
/// Rejected requests leave `state` untouched. On success returns the
/// committed record; `record.to` is the player's new square.
pub fn apply_move(
    state: &mut GameState,
    player: PlayerId,
    steps: u64,
    strict_turns: bool,
) -> Result<MoveRecord, GameError> {
    if steps == 0 {
        return Err(GameError::InvalidStepCount(0));
    }
    if let Some(winner) = state.winner() {
        return Err(GameError::GameFinished { winner });
    }
    if strict_turns && player != state.current_player() {
        return Err(GameError::OutOfTurn {
            expected: state.current_player(),
            actual: player,
        });
    }

    let from = state.position(player);
    let outcome = resolve_move(state.topology(), from, steps);
    let record = MoveRecord {
        turn: state.turn_number(),
        player,
        steps,
        from,
        landed: outcome.landed,
        to: outcome.to,
        bounced: outcome.bounced,
        redirect: outcome.redirect,
    };

    state.commit(record);

    debug!(
        turn = record.turn,
        %player,
        steps,
        from = ?record.from,
        landed = %record.landed,
        to = %record.to,
        bounced = record.bounced,
        redirect = ?record.redirect,
        "move resolved"
    );
    if record.is_winning() {
        info!(%player, turn = record.turn, "player reached the goal");
    }

    Ok(record)
}
