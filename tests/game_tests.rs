//! Game scenario tests.
//!
//! These tests drive the public session API the way a UI would: read the
//! state, roll, move the current player, read the state again.

use snakes_ladders::core::GameState;
use snakes_ladders::rules::apply_move;
use snakes_ladders::{
    BoardLayout, BoardTopology, GameConfig, GameError, GameResult, GameSession, PlayerId,
    RedirectKind, ScriptedDice, Square,
};

fn sq(n: u8) -> Square {
    Square::new(n).unwrap()
}

fn scripted(rolls: &[u8]) -> GameSession<ScriptedDice> {
    let dice = ScriptedDice::new(rolls.iter().copied()).unwrap();
    GameSession::with_dice(GameConfig::default().with_seed(42), dice).unwrap()
}

// =============================================================================
// Fresh Game
// =============================================================================

/// A new game has both players off the board and player 0 to move.
#[test]
fn test_fresh_game_then_first_move() {
    let mut session = scripted(&[1]);
    session.new_game().unwrap();

    let view = session.get_game_state();
    assert_eq!(view.players, [None, None]);
    assert_eq!(view.current_player, 0);

    let square = session.move_player(0, 4).unwrap();
    assert_eq!(square, sq(4));

    let view = session.get_game_state();
    assert_eq!(view.players, [Some(4), None]);
    assert_eq!(view.current_player, 1);
}

/// Reading state never changes it.
#[test]
fn test_get_game_state_is_read_only() {
    let session = scripted(&[1]);

    let first = session.get_game_state();
    let second = session.get_game_state();
    assert_eq!(first, second);
    assert!(session.state().is_fresh());
}

/// The exported topology lists every redirect as an origin/destination pair.
#[test]
fn test_view_exposes_topology_pairs() {
    let session = scripted(&[1]);
    let pairs = session.get_game_state().snakes_and_ladders;

    assert_eq!(pairs.len(), 17);
    assert!(pairs.contains(&(17, 4)));
    assert!(pairs.contains(&(80, 99)));
    assert!(pairs.windows(2).all(|w| w[0].0 < w[1].0));
}

// =============================================================================
// Redirects and Overshoot
// =============================================================================

/// Landing on 17 always ends on 4, however often it happens.
#[test]
fn test_snake_is_deterministic() {
    for _ in 0..5 {
        let mut state = GameState::with_positions(
            BoardTopology::classic(),
            [Some(sq(11)), None],
            PlayerId::FIRST,
        );
        // 11 is a ladder bottom but the player is already standing on it.
        let record = apply_move(&mut state, PlayerId::FIRST, 6, false).unwrap();

        assert_eq!(record.landed, sq(17));
        assert_eq!(record.to, sq(4));
        assert_eq!(record.redirect, Some(RedirectKind::Snake));
    }
}

/// 98 + 5 overshoots to 103 and bounces back to 97.
#[test]
fn test_overshoot_scenario() {
    let mut state =
        GameState::with_positions(BoardTopology::classic(), [None, Some(sq(98))], PlayerId::SECOND);

    let record = apply_move(&mut state, PlayerId::SECOND, 5, false).unwrap();

    assert_eq!(record.to, sq(97));
    assert!(record.bounced);
    assert_eq!(state.current_player(), PlayerId::FIRST);
    assert!(!state.is_finished());
}

// =============================================================================
// Winning
// =============================================================================

/// Reaching 100 exactly ends the game and freezes it.
#[test]
fn test_exact_finish_wins_and_locks() {
    // A single ladder 50 -> 97 gets player 0 close to the goal quickly.
    let config = GameConfig::default()
        .with_seed(1)
        .with_layout(BoardLayout::Custom(vec![(50, 97)]));
    let dice = ScriptedDice::new([6]).unwrap();
    let mut custom = GameSession::with_dice(config, dice).unwrap();

    custom.move_player(0, 50).unwrap();
    assert_eq!(custom.state().position(PlayerId::FIRST), Some(sq(97)));
    custom.move_player(1, 2).unwrap();

    let square = custom.move_player(0, 3).unwrap();
    assert_eq!(square, Square::FINISH);
    assert!(custom.is_finished());
    assert_eq!(custom.result(), Some(GameResult::Winner(PlayerId::FIRST)));
    assert_eq!(custom.get_game_state().winner, Some(0));

    let before = custom.get_game_state();
    assert_eq!(
        custom.move_player(1, 4),
        Err(GameError::GameFinished { winner: PlayerId::FIRST })
    );
    assert_eq!(custom.try_move_player(0, 1), None);
    assert_eq!(custom.get_game_state(), before);

    // Starting over clears the win.
    custom.new_game().unwrap();
    assert!(!custom.is_finished());
    assert_eq!(custom.get_game_state().players, [None, None]);
    assert!(custom.move_player(0, 1).is_ok());
}

/// Turns alternate until somebody wins; the winner keeps the turn.
#[test]
fn test_full_game_alternates_turns() {
    let config = GameConfig::default().with_seed(2024);
    let mut session = GameSession::new(config).unwrap();

    let mut turns = 0;
    while !session.is_finished() && turns < 5000 {
        let before = session.get_game_state().current_player;
        let (_, record) = session.play_turn().unwrap();
        assert_eq!(record.player.index() as u8, before);

        if !record.is_winning() {
            assert_ne!(session.get_game_state().current_player, before);
        }
        turns += 1;
    }

    let winner = session.winner().expect("game should finish");
    assert_eq!(session.state().current_player(), winner);
    assert_eq!(session.state().position(winner), Some(Square::FINISH));
    assert_eq!(session.state().history().len(), turns);
}

// =============================================================================
// Strict Turns
// =============================================================================

/// With strict turns on, only the current player may move.
#[test]
fn test_strict_turns_enforced() {
    let dice = ScriptedDice::new([2]).unwrap();
    let config = GameConfig::default().with_strict_turns(true);
    let mut session = GameSession::with_dice(config, dice).unwrap();

    assert_eq!(
        session.move_player(1, 2),
        Err(GameError::OutOfTurn {
            expected: PlayerId::FIRST,
            actual: PlayerId::SECOND,
        })
    );
    assert!(session.move_player(0, 2).is_ok());
    assert!(session.move_player(1, 2).is_ok());
}

// =============================================================================
// Independent Sessions
// =============================================================================

/// Two sessions share nothing.
#[test]
fn test_sessions_are_independent() {
    let mut a = scripted(&[5]);
    let b = scripted(&[5]);

    a.play_turn().unwrap();

    assert_eq!(a.get_game_state().players, [Some(8), None]); // ladder 5 -> 8
    assert_eq!(b.get_game_state().players, [None, None]);
}
