//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// A hand is already empty, so the game is over.
    #[error("invalid game state: the game is already over")]
    InvalidState,
}

/// Errors that can occur when playing a game to the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayOutError {
    /// A hand is already empty, so the game is over.
    #[error("invalid game state: the game is already over")]
    InvalidState,
    /// The configured round limit was reached before either side ran out.
    #[error("round limit of {0} reached without a winner")]
    RoundLimit(u32),
}

impl From<RoundError> for PlayOutError {
    fn from(err: RoundError) -> Self {
        match err {
            RoundError::InvalidState => Self::InvalidState,
        }
    }
}
