//! Application state and logic.

use super::input::{Action, move_cursor};
use crossterm::event::KeyCode;
use std::time::Instant;
use tictac_core::{Game, GameMode, Position};
use tracing::{debug, info};

/// Whether the event loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the game.
    Quit,
}

/// Main application state.
///
/// Forwards user actions to the [`Game`] and keeps the keyboard cursor.
/// Everything shown on screen is read back from the game.
pub struct App {
    game: Game,
    cursor: Position,
}

impl App {
    /// Creates a new application around a game.
    pub fn new(game: Game) -> Self {
        Self {
            game,
            cursor: Position::Center,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// When the event loop must wake to let the AI move.
    pub fn wake_at(&self) -> Option<Instant> {
        self.game.ai_deadline()
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        let Some(action) = Action::from_key(key) else {
            return Control::Continue;
        };
        debug!(?action, "Handling action");

        match action {
            Action::Play(idx) => self.game.apply_move(idx),
            Action::PlayCursor => self.game.apply_move(self.cursor.to_index()),
            Action::Cursor(arrow) => self.cursor = move_cursor(self.cursor, arrow),
            Action::Restart => self.game.reset(),
            Action::ToggleMode => {
                let ai_enabled = !self.game.mode().is_ai();
                self.game.set_mode(ai_enabled);
                info!(mode = self.game.mode().name(), "Mode changed");
            }
            Action::Quit => return Control::Quit,
        }

        Control::Continue
    }

    /// Lets the AI move if its turn has come.
    pub fn on_tick(&mut self, now: Instant) {
        if let Some(reply) = self.game.tick(now) {
            debug!(%reply, "AI moved");
        }
    }

    /// Status line text.
    pub fn status_text(&self) -> String {
        let status = self.game.status();
        if self.game.is_ai_turn() {
            format!("{status} (AI is thinking...)")
        } else {
            status.to_string()
        }
    }

    /// Mode line text.
    pub fn mode_text(&self) -> &'static str {
        match self.game.mode() {
            GameMode::HumanVsHuman => "Mode: Human vs Human",
            GameMode::HumanVsAi => "Mode: Human vs AI (you are X)",
        }
    }
}
