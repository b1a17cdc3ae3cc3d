//! Tic-tac-toe game logic.
//!
//! This crate owns everything a presentation layer needs to run a game
//! of tic-tac-toe against a friend or against a heuristic computer
//! opponent. It exposes plain data and functions; rendering and input
//! wiring live elsewhere.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Player`], [`GameStatus`]
//! - **Positions**: [`Position`] and the eight winning [`LINES`]
//! - **Rules**: pure win/draw evaluation in [`rules`]
//! - **AI**: the tiered move heuristic in [`ai`]
//! - **Game**: [`Game`], the single owner of all mutable state,
//!   including the deferred AI trigger ([`DeferredMove`])
//!
//! # Example
//!
//! ```
//! use tictac_core::{Game, GameStatus, Player};
//!
//! let mut game = Game::seeded(7);
//! game.apply_move(4);
//! assert_eq!(game.status(), GameStatus::InProgress(Player::O));
//!
//! // Occupied squares are silently ignored.
//! game.apply_move(4);
//! assert_eq!(game.to_move(), Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod ai;
mod game;
mod mode;
mod position;
pub mod rules;
mod timer;
mod types;

pub use action::{Move, MoveError};
pub use game::{AI_MARK, Game};
pub use mode::GameMode;
pub use position::{LINES, Line, Position};
pub use timer::{AI_MOVE_DELAY, DeferredMove};
pub use types::{Board, GameStatus, Player, Square};
