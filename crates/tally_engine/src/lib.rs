//! Tally engine - pure tic-tac-toe round and score state machine
//!
//! The engine owns the board, whose turn it is, the outcome of the current
//! round and the running win tally of the match. Front-ends hold one
//! [`GameEngine`], forward validated cell indices to [`GameEngine::play`] and
//! re-render from the engine's queries after every call.
//!
//! # Example
//!
//! ```
//! use tally_engine::{GameEngine, Player, RoundOutcome};
//!
//! # fn main() -> Result<(), tally_engine::EngineError> {
//! let mut engine = GameEngine::new();
//! for index in [0, 4, 1, 3, 2] {
//!     engine.play(index)?;
//! }
//!
//! assert_eq!(engine.winner(), Some(Player::X));
//! assert_eq!(engine.scores(), (1, 0));
//! assert!(matches!(engine.outcome(), RoundOutcome::Win { .. }));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod outcome;
mod position;
mod rules;
mod score;
mod types;

pub use engine::{GameEngine, PlayResult, Rejection, Snapshot};
pub use error::EngineError;
pub use outcome::RoundOutcome;
pub use position::Position;
pub use rules::{WinningLine, check_winner, is_full};
pub use score::Score;
pub use types::{Board, Cell, Player};
