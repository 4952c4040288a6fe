//! Error types for the player and the game loop.

use thiserror::Error;

/// Errors raised by the automated player.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// A guess or feedback arrived before `start_new_game`.
    #[error("player has not been given a game to play")]
    NotStarted,

    /// Every candidate was eliminated.
    ///
    /// The secret can never be filtered out by consistent feedback, so this
    /// means the feedback was corrupted or came from a different game.
    #[error("no candidate words remain; feedback is inconsistent with the dictionary")]
    NoCandidatesRemaining,
}

/// Errors raised while setting up or playing a game.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("dictionary is empty")]
    EmptyDictionary,

    #[error("secret word '{0}' is not in the dictionary")]
    SecretNotInDictionary(String),

    #[error("a game needs at least one guess")]
    InvalidGuessBudget,

    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
