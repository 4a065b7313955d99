use thiserror::Error;

/// Errors raised by a [`Board`](crate::Board) or by payoff validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DuelError {
    #[error("Game is not terminal")]
    NotTerminal,

    #[error("No payoff reported for player {0}")]
    MissingPayoff(String),

    #[error("Invalid payoff: {0}")]
    InvalidPayoff(String),
}

/// Convenience Result type for board and search operations
pub type Result<T> = std::result::Result<T, DuelError>;
