//! Round outcome.

use crate::{Player, WinningLine};
use serde::{Deserialize, Serialize};

/// Outcome of the current round.
///
/// `Win` and `Draw` are terminal: the board is frozen until a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Round accepts moves.
    #[default]
    InProgress,
    /// `player` completed `line`.
    Win {
        /// The player who completed the line.
        player: Player,
        /// The completed line.
        line: WinningLine,
    },
    /// Board filled with no completed line.
    Draw,
}

impl RoundOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            RoundOutcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            RoundOutcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, RoundOutcome::Draw)
    }

    /// Returns true once the round no longer accepts moves.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RoundOutcome::InProgress)
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundOutcome::InProgress => write!(f, "In progress"),
            RoundOutcome::Win { player, .. } => write!(f, "Player {} wins!", player),
            RoundOutcome::Draw => write!(f, "It's a draw!"),
        }
    }
}
