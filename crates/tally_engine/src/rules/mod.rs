//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`crate::Board`]. The engine composes them in a
//! fixed order: win first, then draw.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{WinningLine, check_winner};
