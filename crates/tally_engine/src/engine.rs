//! Round and match state machine.
//!
//! [`GameEngine`] is the single source of truth for a game: front-ends send
//! it cell indices and reset commands and render whatever its queries return.

use crate::rules::{check_winner, is_full};
use crate::{Board, Cell, EngineError, Player, Position, RoundOutcome, Score, WinningLine};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Why a well-formed move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The target cell already holds a mark.
    #[display("{} is already taken", _0)]
    CellOccupied(Position),
    /// The round has ended; reset before playing again.
    #[display("Round is over")]
    RoundOver,
}

/// Result of a call to [`GameEngine::play_at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayResult {
    /// The mark was placed.
    Accepted {
        /// Who placed the mark.
        player: Player,
        /// Where it was placed.
        position: Position,
        /// Round outcome after the move.
        outcome: RoundOutcome,
    },
    /// Nothing changed.
    Rejected(Rejection),
}

impl PlayResult {
    /// Returns true if the move was applied.
    pub fn is_accepted(&self) -> bool {
        matches!(self, PlayResult::Accepted { .. })
    }
}

/// Tic-tac-toe engine for one match.
///
/// Owns the board, the player to move, the round outcome and the score.
/// Every operation is synchronous and atomic with respect to this state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    outcome: RoundOutcome,
    score: Score,
    rounds_played: u32,
}

impl GameEngine {
    /// Creates an engine with an empty board, X to move and no score.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Plays the current player's mark at `index` (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::IndexOutOfRange`] when `index` is not a cell.
    /// State is left untouched in that case.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play(&mut self, index: i64) -> Result<PlayResult, EngineError> {
        let pos = Position::try_from(index)?;
        Ok(self.play_at(pos))
    }

    /// Plays the current player's mark at `pos`.
    ///
    /// Occupied cells and finished rounds yield [`PlayResult::Rejected`]
    /// without mutating anything.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play_at(&mut self, pos: Position) -> PlayResult {
        if self.outcome.is_terminal() {
            debug!("Move rejected: round is over");
            return PlayResult::Rejected(Rejection::RoundOver);
        }
        if !self.board.is_empty(pos) {
            debug!("Move rejected: cell occupied");
            return PlayResult::Rejected(Rejection::CellOccupied(pos));
        }

        let player = self.current_player;
        self.board.set(pos, Cell::Marked(player));

        // Win is checked before draw: filling the last cell with a line is a win.
        if let Some((winner, line)) = check_winner(&self.board) {
            self.outcome = RoundOutcome::Win {
                player: winner,
                line,
            };
            self.score.record_win(winner);
            self.rounds_played = self.rounds_played.saturating_add(1);
            info!(%winner, line = ?line.indices(), "Round won");
        } else if is_full(&self.board) {
            self.outcome = RoundOutcome::Draw;
            self.rounds_played = self.rounds_played.saturating_add(1);
            info!("Round drawn");
        } else {
            self.current_player = player.opponent();
        }

        debug!(position = %pos, outcome = ?self.outcome, "Move accepted");
        PlayResult::Accepted {
            player,
            position: pos,
            outcome: self.outcome,
        }
    }

    /// Clears the board and starts a new round with X. Scores are kept.
    #[instrument(skip(self))]
    pub fn reset_round(&mut self) {
        self.board.clear();
        self.current_player = Player::X;
        self.outcome = RoundOutcome::InProgress;
        info!("Round reset");
    }

    /// Starts a new match: resets the round and zeroes the scores.
    #[instrument(skip(self))]
    pub fn reset_match(&mut self) {
        self.reset_round();
        self.score.reset();
        self.rounds_played = 0;
        info!("Match reset");
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move, or the last mover once the round ended.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the round outcome.
    pub fn outcome(&self) -> RoundOutcome {
        self.outcome
    }

    /// Returns the round winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.outcome.winner()
    }

    /// Returns the completed line, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.outcome.winning_line()
    }

    /// Returns true if the round ended in a draw.
    pub fn is_draw(&self) -> bool {
        self.outcome.is_draw()
    }

    /// Returns true while the round accepts moves.
    pub fn is_active(&self) -> bool {
        !self.outcome.is_terminal()
    }

    /// Returns the scoreboard.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Returns `(x_wins, o_wins)`.
    pub fn scores(&self) -> (u32, u32) {
        (self.score.wins(Player::X), self.score.wins(Player::O))
    }

    /// Rounds finished (won or drawn) since the match started.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Status line for the UI.
    pub fn status_message(&self) -> String {
        match self.outcome {
            RoundOutcome::InProgress => format!("Player {}'s turn", self.current_player),
            terminal => terminal.to_string(),
        }
    }

    /// Copies all observable state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            current_player: self.current_player,
            outcome: self.outcome,
            score: self.score,
            rounds_played: self.rounds_played,
            active: self.is_active(),
            status: self.status_message(),
        }
    }
}

/// Serializable view of a [`GameEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// The board.
    board: Board,
    /// Player to move (or last mover when the round is over).
    current_player: Player,
    /// Round outcome.
    outcome: RoundOutcome,
    /// Match scoreboard.
    score: Score,
    /// Finished rounds in this match.
    rounds_played: u32,
    /// Whether the round accepts moves.
    active: bool,
    /// Status line.
    status: String,
}
