//! Application state and logic.

use super::input::{Action, action_for};
use crossterm::event::KeyCode;
use tally_engine::{GameEngine, PlayResult, Position};
use tracing::{debug, warn};

/// Main application state.
///
/// The engine is the only game state; everything else here is cursor and
/// message bookkeeping for the terminal.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    notice: Option<String>,
    show_hints: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(show_hints: bool) -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            notice: None,
            show_hints,
            should_quit: false,
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Last transient message (rejected move, reset confirmation).
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether empty cells show their number.
    pub fn show_hints(&self) -> bool {
        self.show_hints
    }

    /// Whether the run loop should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(action) = action_for(self.cursor, key) {
            self.apply(action);
        }
    }

    /// Applies an action.
    pub fn apply(&mut self, action: Action) {
        debug!(?action, "Handling action");
        match action {
            Action::Cursor(pos) => self.cursor = pos,
            Action::PlayCursor => self.play(self.cursor.to_index() as i64),
            Action::PlayCell(index) => self.play(index),
            Action::ResetRound => {
                self.engine.reset_round();
                self.notice = Some("Round reset".to_string());
            }
            Action::NewMatch => {
                self.engine.reset_match();
                self.cursor = Position::Center;
                self.notice = Some("New game, scores cleared".to_string());
            }
            Action::Quit => self.should_quit = true,
        }
    }

    fn play(&mut self, index: i64) {
        match self.engine.play(index) {
            Ok(PlayResult::Accepted { position, .. }) => {
                self.cursor = position;
                self.notice = None;
            }
            Ok(PlayResult::Rejected(reason)) => {
                debug!(%reason, "Move rejected");
                self.notice = Some(reason.to_string());
            }
            Err(e) => {
                // Key mapping only produces 0-8.
                warn!(error = %e, "Invalid cell index from input");
                self.notice = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_engine::{Cell, Player};

    fn press_all(app: &mut App, keys: &[char]) {
        for &c in keys {
            app.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn test_number_keys_play_cells() {
        let mut app = App::new(true);
        press_all(&mut app, &['1', '5']);
        let board = app.engine().board();
        assert_eq!(board.get(Position::TopLeft), Cell::Marked(Player::X));
        assert_eq!(board.get(Position::Center), Cell::Marked(Player::O));
        assert_eq!(app.cursor(), Position::Center);
    }

    #[test]
    fn test_cursor_play() {
        let mut app = App::new(true);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Enter);
        assert_eq!(
            app.engine().board().get(Position::TopLeft),
            Cell::Marked(Player::X)
        );
    }

    #[test]
    fn test_rejected_move_sets_notice_only() {
        let mut app = App::new(true);
        press_all(&mut app, &['5']);
        let before = app.engine().clone();

        press_all(&mut app, &['5']);
        assert_eq!(app.engine(), &before);
        assert_eq!(app.notice(), Some("Center is already taken"));
    }

    #[test]
    fn test_round_and_match_reset_keys() {
        let mut app = App::new(true);
        // X: 1 2 3, O: 4 5
        press_all(&mut app, &['1', '4', '2', '5', '3']);
        assert_eq!(app.engine().scores(), (1, 0));

        press_all(&mut app, &['7']);
        assert_eq!(app.notice(), Some("Round is over"));

        press_all(&mut app, &['r']);
        assert!(app.engine().is_active());
        assert_eq!(app.engine().scores(), (1, 0));

        press_all(&mut app, &['n']);
        assert_eq!(app.engine().scores(), (0, 0));
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(false);
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
