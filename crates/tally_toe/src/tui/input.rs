//! Keyboard mapping for the board.

use crossterm::event::KeyCode;
use tally_engine::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    Cursor(Position),
    /// Play the cell under the cursor.
    PlayCursor,
    /// Play a cell chosen by number key.
    PlayCell(i64),
    /// Clear the board, keep the score.
    ResetRound,
    /// Clear the board and the score.
    NewMatch,
    /// Leave the app.
    Quit,
}

/// Maps a key to an action given the current cursor.
pub fn action_for(cursor: Position, key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::Cursor(move_cursor(cursor, key)))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayCursor),
        // Keys 1-9 follow the numbers shown in empty cells.
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| Action::PlayCell(i64::from(digit) - 1)),
        KeyCode::Char('r') => Some(Action::ResetRound),
        KeyCode::Char('n') => Some(Action::NewMatch),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys. Edges do not wrap.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => Position::from_row_col(row.wrapping_sub(1), col),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        KeyCode::Left => Position::from_row_col(row, col.wrapping_sub(1)),
        KeyCode::Right => Position::from_row_col(row, col + 1),
        _ => None,
    };
    target.unwrap_or(cursor)
}
