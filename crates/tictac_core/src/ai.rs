//! Heuristic computer opponent.
//!
//! The heuristic tries, in order:
//!
//! 1. complete one of its own lines,
//! 2. block a line the opponent is about to complete,
//! 3. take the center,
//! 4. take a uniformly random empty square.
//!
//! This is not minimax. It only looks one move ahead, so it never sets up
//! forks and cannot see the opponent's forks coming; a careful player can
//! beat it.

use super::{Board, LINES, Player, Position, Square};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Picks the AI's move for `mark` on the given board.
///
/// Returns `None` only when the board has no empty square.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn find_best_move<R: Rng + ?Sized>(
    board: &Board,
    mark: Player,
    rng: &mut R,
) -> Option<Position> {
    if let Some(pos) = winning_square(board, mark) {
        debug!(position = %pos, "Completing own line");
        return Some(pos);
    }

    if let Some(pos) = winning_square(board, mark.opponent()) {
        debug!(position = %pos, "Blocking opponent");
        return Some(pos);
    }

    if board.is_empty(Position::Center) {
        debug!("Taking center");
        return Some(Position::Center);
    }

    let pos = Position::valid_moves(board).choose(rng).copied();
    debug!(position = ?pos, "Random empty square");
    pos
}

/// Finds the empty square that would complete a line for `mark`.
///
/// Lines are scanned in [`LINES`] order. Within a line `[a, b, c]` the
/// pairs are tried as `a,b -> c`, then `a,c -> b`, then `b,c -> a`.
pub fn winning_square(board: &Board, mark: Player) -> Option<Position> {
    let own = Square::Occupied(mark);
    LINES.iter().find_map(|&[a, b, c]| {
        [(a, b, c), (a, c, b), (b, c, a)]
            .into_iter()
            .find(|&(x, y, target)| {
                board.get(x) == own && board.get(y) == own && board.is_empty(target)
            })
            .map(|(_, _, target)| target)
    })
}
