use gomoku_core::{BoardError, Player};
use thiserror::Error;

/// Errors raised while configuring or running an agent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AgentError {
    #[error("search depth must be at least 1")]
    InvalidDepth,

    #[error("neighbourhood radius must be at least 1")]
    InvalidRadius,

    #[error("{agent} plays {plays} but was asked to move for {to_move}")]
    WrongTurn {
        agent: String,
        plays: Player,
        to_move: Player,
    },

    #[error(transparent)]
    Board(#[from] BoardError),
}

pub type Result<T> = std::result::Result<T, AgentError>;
