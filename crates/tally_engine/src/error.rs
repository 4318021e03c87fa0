//! Engine error types.

use derive_more::{Display, Error};

/// Contract violation by the caller.
///
/// Illegal-but-well-formed moves (occupied cell, finished round) are not
/// errors; they come back as [`crate::Rejection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Cell index outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    IndexOutOfRange(#[error(not(source))] i64),
}
