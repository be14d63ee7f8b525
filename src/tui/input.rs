//! Keyboard mapping for the terminal view.

use magic_tictactoe::{Direction, Position};
use crossterm::event::KeyCode;

/// What a key press asks the view to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor one cell.
    MoveCursor(Direction),
    /// Play the cell under the cursor.
    PlayCursor,
    /// Play a cell picked by keypad number.
    PlayAt(Position),
    /// Start a new game.
    Reset,
    /// Leave the program.
    Quit,
}

/// Maps a key to an action; unmapped keys do nothing.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Up => Some(Action::MoveCursor(Direction::Up)),
        KeyCode::Down => Some(Action::MoveCursor(Direction::Down)),
        KeyCode::Left => Some(Action::MoveCursor(Direction::Left)),
        KeyCode::Right => Some(Action::MoveCursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayCursor),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Reset),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c) if c.is_ascii_digit() => Position::from_keypad(c).map(Action::PlayAt),
        _ => None,
    }
}
