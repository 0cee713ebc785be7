//! Session management.
//!
//! A `GameSession` owns exactly one game at a time plus the dice and the
//! board generator. It is the operation surface a UI or transport layer
//! calls into.
//!
//! ## Orchestration
//!
//! Rolling and moving are separate calls: `roll_dice` only draws a value
//! and `move_player` applies whatever step count the caller passes. A
//! caller that wants both in one step uses `play_turn`.
//!
//! Every mutating method takes `&mut self`, so a session shared between
//! callers has to sit behind a lock; one mutation is in flight at a time.

use tracing::{info, warn};

use crate::board::BoardTopology;
use crate::core::config::{BoardLayout, GameConfig};
use crate::core::error::GameError;
use crate::core::history::MoveRecord;
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;
use crate::core::square::Square;
use crate::core::state::GameState;
use crate::dice::{DiceSource, RandomDice};
use crate::rules::{apply_move, is_terminal, GameResult};

use super::view::GameStateView;

/// One in-memory game plus its dice.
#[derive(Debug)]
pub struct GameSession<D = RandomDice> {
    config: GameConfig,
    board_rng: GameRng,
    dice: D,
    state: GameState,
}

impl GameSession<RandomDice> {
    /// Start a session with dice drawn from the config seed.
    ///
    /// ```
    /// use snakes_ladders::{GameConfig, GameSession};
    ///
    /// let mut session = GameSession::new(GameConfig::default().with_seed(1)).unwrap();
    /// let roll = session.roll_dice();
    /// assert!((1..=6).contains(&roll));
    /// ```
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let root = root_rng(&config);
        let dice = RandomDice::new(root.for_context("dice"));
        Self::build(config, &root, dice)
    }
}

impl<D: DiceSource> GameSession<D> {
    /// Start a session with a caller-supplied dice source.
    pub fn with_dice(config: GameConfig, dice: D) -> Result<Self, GameError> {
        let root = root_rng(&config);
        Self::build(config, &root, dice)
    }

    fn build(config: GameConfig, root: &GameRng, dice: D) -> Result<Self, GameError> {
        config.validate()?;

        let mut board_rng = root.for_context("topology");
        let topology = BoardTopology::from_layout(&config.layout, &mut board_rng)?;
        info!(
            seed = root.seed(),
            layout = ?config.layout,
            redirects = topology.len(),
            "session started"
        );

        Ok(Self {
            config,
            board_rng,
            dice,
            state: GameState::new(topology),
        })
    }

    /// Start over with a fresh board.
    ///
    /// Random layouts draw a new board; fixed layouts rebuild the same one.
    /// Calling this twice in a row leaves the same start state shape.
    pub fn new_game(&mut self) -> Result<(), GameError> {
        let topology = BoardTopology::from_layout(&self.config.layout, &mut self.board_rng)?;
        info!(redirects = topology.len(), "new game");
        self.state = GameState::new(topology);
        Ok(())
    }

    /// Start over on the current board.
    pub fn init_game(&mut self) {
        let topology = self.state.topology().clone();
        info!(redirects = topology.len(), "game reset on current board");
        self.state = GameState::new(topology);
    }

    /// The current game.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned snapshot for rendering or serialization.
    #[must_use]
    pub fn get_game_state(&self) -> GameStateView {
        GameStateView::from(&self.state)
    }

    /// Draw one die value. Does not change the game.
    pub fn roll_dice(&mut self) -> u8 {
        self.dice.roll()
    }

    /// Move a player by `steps` and return the new square.
    ///
    /// Takes raw integers so malformed input is reported, not truncated.
    pub fn move_player(&mut self, player_index: i64, steps: i64) -> Result<Square, GameError> {
        self.checked_move(player_index, steps)
            .map(|record| record.to)
            .map_err(|err| {
                warn!(player_index, steps, error = %err, "move rejected");
                err
            })
    }

    /// `move_player` for boundaries that signal bad input with an empty result.
    pub fn try_move_player(&mut self, player_index: i64, steps: i64) -> Option<Square> {
        self.move_player(player_index, steps).ok()
    }

    /// Roll for the current player and move them.
    ///
    /// Nothing is rolled once the game is over.
    pub fn play_turn(&mut self) -> Result<(u8, MoveRecord), GameError> {
        if let Some(winner) = self.state.winner() {
            return Err(GameError::GameFinished { winner });
        }

        let roll = self.roll_dice();
        let player = self.state.current_player();
        let record = apply_move(&mut self.state, player, u64::from(roll), self.config.strict_turns)?;
        Ok((roll, record))
    }

    /// True once someone has reached the goal.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Player who reached the goal, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner()
    }

    /// Outcome, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        is_terminal(&self.state)
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// True if `new_game` draws a different board each time.
    #[must_use]
    pub fn regenerates_board(&self) -> bool {
        matches!(self.config.layout, BoardLayout::Random { .. })
    }

    /// The dice source.
    #[must_use]
    pub fn dice(&self) -> &D {
        &self.dice
    }

    fn checked_move(&mut self, player_index: i64, steps: i64) -> Result<MoveRecord, GameError> {
        let player =
            PlayerId::from_index(player_index).ok_or(GameError::InvalidPlayerIndex(player_index))?;
        let steps = u64::try_from(steps)
            .ok()
            .filter(|&s| s > 0)
            .ok_or(GameError::InvalidStepCount(steps))?;

        apply_move(&mut self.state, player, steps, self.config.strict_turns)
    }
}

fn root_rng(config: &GameConfig) -> GameRng {
    config.seed.map_or_else(GameRng::from_entropy, GameRng::new)
}
