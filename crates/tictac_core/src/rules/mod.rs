//! Game rules for tic-tac-toe.
//!
//! Pure functions over board snapshots. Rules are separated from board
//! storage so that status is always recomputed, never cached.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;

use super::{Board, GameStatus, Player};
use tracing::instrument;

/// Derives the game status from a board and the player to move.
///
/// A win takes precedence over a draw, which takes precedence over an
/// ongoing game.
#[instrument(skip(board))]
pub fn status(board: &Board, to_move: Player) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress(to_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player::*, Square};

    fn board(cells: [Option<Player>; 9]) -> Board {
        Board::from_squares(cells.map(|c| c.map_or(Square::Empty, Square::Occupied)))
    }

    #[test]
    fn test_in_progress_reports_mover() {
        assert_eq!(status(&Board::new(), X), GameStatus::InProgress(X));
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        // X wins on the final move with the board full.
        let b = board([
            Some(X), Some(O), Some(X),
            Some(O), Some(X), Some(O),
            Some(O), Some(X), Some(X),
        ]);
        assert_eq!(status(&b, O), GameStatus::Won(X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let b = board([
            Some(X), Some(O), Some(X),
            Some(X), Some(O), Some(O),
            Some(O), Some(X), Some(X),
        ]);
        assert_eq!(status(&b, O), GameStatus::Draw);
    }
}
