//! Key handling: cursor movement and key-to-action mapping.

use crossterm::event::KeyCode;
use tictac_core::Position;

/// What a key press asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Activate the cell at this index (0-8).
    Play(usize),
    /// Activate the cell under the cursor.
    PlayCursor,
    /// Move the cursor with an arrow key.
    Cursor(KeyCode),
    /// Restart the game.
    Restart,
    /// Switch between playing a friend and playing the AI.
    ToggleMode,
    /// Leave the game.
    Quit,
}

impl Action {
    /// Maps a key to an action, if it has one.
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| Self::Play(d as usize - 1)),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Self::PlayCursor),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                Some(Self::Cursor(key))
            }
            KeyCode::Char('r') => Some(Self::Restart),
            KeyCode::Char('m') => Some(Self::ToggleMode),
            KeyCode::Char('q') | KeyCode::Esc => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Moves cursor based on arrow keys.
///
/// The cursor stops at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let idx = cursor.to_index();
    let (row, col) = (idx / 3, idx % 3);

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_to_zero_based_cells() {
        assert_eq!(Action::from_key(KeyCode::Char('1')), Some(Action::Play(0)));
        assert_eq!(Action::from_key(KeyCode::Char('9')), Some(Action::Play(8)));
        assert_eq!(Action::from_key(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(Action::from_key(KeyCode::Char('r')), Some(Action::Restart));
        assert_eq!(Action::from_key(KeyCode::Char('m')), Some(Action::ToggleMode));
        assert_eq!(Action::from_key(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(Action::from_key(KeyCode::Enter), Some(Action::PlayCursor));
    }

    #[test]
    fn test_cursor_moves_within_grid() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
        assert_eq!(move_cursor(Position::TopRight, KeyCode::Right), Position::TopRight);
    }
}
