//! Match scoreboard.

use crate::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Win tally across the rounds of a match.
///
/// Draws are not counted. Only a match reset brings the counters down.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Getters, Serialize, Deserialize,
)]
pub struct Score {
    /// Rounds won by X.
    x_wins: u32,
    /// Rounds won by O.
    o_wins: u32,
}

impl Score {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Counts one more round won by `player`.
    pub(crate) fn record_win(&mut self, player: Player) {
        let counter = match player {
            Player::X => &mut self.x_wins,
            Player::O => &mut self.o_wins,
        };
        *counter = counter.saturating_add(1);
        debug!(%player, x_wins = self.x_wins, o_wins = self.o_wins, "Win recorded");
    }

    /// Zeroes both counters.
    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_reset() {
        let mut score = Score::new();
        score.record_win(Player::O);
        score.record_win(Player::O);
        score.record_win(Player::X);

        assert_eq!(*score.x_wins(), 1);
        assert_eq!(*score.o_wins(), 2);
        assert_eq!(score.wins(Player::O), 2);

        score.reset();
        assert_eq!(score, Score::new());
    }
}
