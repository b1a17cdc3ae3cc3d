//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Occupied(player) => Some(player),
            Square::Empty => None,
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Only the game engine mutates a board; everything outside the crate
/// sees snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from nine squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                match self.squares[idx] {
                    Square::Empty => write!(f, "{}", idx + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Current status of the game.
///
/// Always derived from a board; never stored alongside it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum GameStatus {
    /// Game is ongoing; holds the player to move next.
    #[display("Next player: {_0}")]
    InProgress(Player),
    /// Game ended in a win.
    #[display("Winner: {_0}")]
    Won(Player),
    /// Game ended in a draw.
    #[display("It's a Draw!")]
    Draw,
}

impl GameStatus {
    /// Returns true once the game has been won or drawn.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_display_shows_key_numbers_for_empty_squares() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::O));
        assert_eq!(board.to_string(), "1|2|O\n-+-+-\n4|X|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_status_text() {
        assert_eq!(GameStatus::InProgress(Player::X).to_string(), "Next player: X");
        assert_eq!(GameStatus::Won(Player::O).to_string(), "Winner: O");
        assert_eq!(GameStatus::Draw.to_string(), "It's a Draw!");
    }

    #[test]
    fn test_is_over() {
        assert!(!GameStatus::InProgress(Player::O).is_over());
        assert!(GameStatus::Won(Player::X).is_over());
        assert!(GameStatus::Draw.is_over());
    }

    #[test]
    fn test_full_board() {
        let board = Board::from_squares([Square::Occupied(Player::X); 9]);
        assert!(board.is_full());
        assert!(!Board::new().is_full());
    }
}
