//! Win detection logic for tic-tac-toe.

use super::super::{Board, LINES, Player};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Lines are scanned rows first, then columns, then diagonals; the first
/// uniform, non-empty line decides. Returns `None` if no line matches.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let player = board.get(a).player()?;
        (board.get(b) == board.get(a) && board.get(c) == board.get(a)).then_some(player)
    })
}
