//! Engine error types.

use thiserror::Error;

/// Errors surfaced by the board engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A raw direction code outside `0..=3`. The board is left untouched.
    #[error("invalid direction code {0} (expected 0=up, 1=down, 2=left, 3=right)")]
    InvalidDirection(i64),

    /// A tile spawn was requested on a full board.
    ///
    /// Callers must check for game over before spawning; seeing this means the
    /// caller ordered its calls wrong.
    #[error("no empty cell left to spawn a tile into")]
    NoEmptyCell,
}

impl EngineError {
    /// Whether a session can re-prompt and carry on after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, EngineError::InvalidDirection(_))
    }
}
