//! Error types for the bingo caller.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BingoError {
    #[error("Invalid ball identifier: {0}")]
    InvalidBall(String),

    #[error("Unknown caller mode: {0}")]
    UnknownMode(String),

    #[error("Caller mode cannot change while a round is in progress")]
    RoundInProgress,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Speech error: {0}")]
    SpeechError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
