//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A draw is a full board with no winner.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // X O X / O X X / O X O
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::O));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        board.set(Position::MiddleLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::X));
        board.set(Position::MiddleRight, Square::Occupied(Player::X));
        board.set(Position::BottomLeft, Square::Occupied(Player::O));
        board.set(Position::BottomCenter, Square::Occupied(Player::X));
        board.set(Position::BottomRight, Square::Occupied(Player::O));

        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        board.set(Position::MiddleLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));

        assert!(!is_draw(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        let mut board = Board::new();
        // X X X / O O X / X O O
        for (pos, p) in Position::ALL.into_iter().zip([
            Player::X, Player::X, Player::X,
            Player::O, Player::O, Player::X,
            Player::X, Player::O, Player::O,
        ]) {
            board.set(pos, Square::Occupied(p));
        }
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
