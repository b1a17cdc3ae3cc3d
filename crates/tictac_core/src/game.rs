//! The game engine: sole owner of board, turn, mode and AI trigger.

use super::action::{Move, MoveError};
use super::ai::find_best_move;
use super::mode::GameMode;
use super::position::Position;
use super::rules;
use super::timer::DeferredMove;
use super::types::{Board, GameStatus, Player, Square};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// The mark the computer opponent plays.
pub const AI_MARK: Player = Player::O;

/// Tic-tac-toe game engine.
///
/// Every mutation goes through this type. Status is recomputed from the
/// board on each query. In [`GameMode::HumanVsAi`] the engine arms a
/// [`DeferredMove`] whenever `O` is to move; [`Game::tick`] plays the AI's
/// move once that trigger is due. Any accepted move, reset or mode change
/// cancels a pending trigger before anything else happens.
#[derive(Debug, Clone)]
pub struct Game<R = ChaCha8Rng> {
    board: Board,
    to_move: Player,
    mode: GameMode,
    ai_timer: DeferredMove,
    rng: R,
}

impl Game<ChaCha8Rng> {
    /// Creates a new human-vs-human game with an entropy-seeded AI.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    /// Creates a new game whose AI tie-breaks are reproducible.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Default for Game<ChaCha8Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Game<R> {
    /// Creates a new human-vs-human game drawing AI randomness from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            mode: GameMode::default(),
            ai_timer: DeferredMove::new(),
            rng,
        }
    }

    /// Starts the game in the given mode.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.set_mode(mode.is_ai());
        self
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the current mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the game status, derived from the current board.
    pub fn status(&self) -> GameStatus {
        rules::status(&self.board, self.to_move)
    }

    /// When the pending AI move is due, if one is pending.
    pub fn ai_deadline(&self) -> Option<Instant> {
        self.ai_timer.deadline()
    }

    /// Returns true when the computer opponent is the one to move.
    pub fn is_ai_turn(&self) -> bool {
        self.mode.is_ai() && self.to_move == AI_MARK && !self.status().is_over()
    }

    /// Places the current mover's mark at `index` (0-8).
    ///
    /// Occupied squares, finished games and out-of-range indices are
    /// ignored without any state change.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize) {
        if let Err(e) = self.try_move(index) {
            debug!(error = %e, "Move ignored");
        }
    }

    /// Places the current mover's mark at `index`, reporting why a move
    /// was not applied.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if `index` is not 0-8
    /// - [`MoveError::GameOver`] if the game has been won or drawn
    /// - [`MoveError::SquareOccupied`] if the square is taken
    #[instrument(skip(self))]
    pub fn try_move(&mut self, index: usize) -> Result<Move, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;

        if self.status().is_over() {
            return Err(MoveError::GameOver);
        }

        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        Ok(self.place(pos))
    }

    /// Clears the board and gives the first move back to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.ai_timer.cancel();
        self.board = Board::new();
        self.to_move = Player::X;
        info!(mode = ?self.mode, "Game reset");
        self.schedule_ai();
    }

    /// Switches the computer opponent on or off.
    ///
    /// Always restarts the game, even when the mode does not change.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, ai_enabled: bool) {
        self.ai_timer.cancel();
        self.mode = GameMode::from_ai_enabled(ai_enabled);
        self.reset();
    }

    /// Flips the mode, restarting the game.
    pub fn toggle_mode(&mut self) {
        self.set_mode(!self.mode.is_ai());
    }

    /// Plays the AI's move if its deferred trigger is due at `now`.
    ///
    /// Returns the move that was played, or `None` when nothing was due.
    #[instrument(skip(self))]
    pub fn tick(&mut self, now: Instant) -> Option<Move> {
        if !self.ai_timer.fire(now) {
            return None;
        }

        if !self.is_ai_turn() {
            warn!(to_move = %self.to_move, "AI trigger fired out of turn");
            return None;
        }

        let pos = find_best_move(&self.board, AI_MARK, &mut self.rng)?;
        Some(self.place(pos))
    }

    /// The single mutation path shared by human and AI moves.
    fn place(&mut self, pos: Position) -> Move {
        self.ai_timer.cancel();

        let action = Move::new(self.to_move, pos);
        self.board.set(pos, Square::Occupied(action.player));
        self.to_move = action.player.opponent();

        info!(%action, status = %self.status(), "Move applied");
        self.schedule_ai();
        action
    }

    fn schedule_ai(&mut self) {
        self.ai_timer.cancel();
        if self.is_ai_turn() {
            debug!("Scheduling AI move");
            self.ai_timer.arm(Instant::now());
        }
    }
}
