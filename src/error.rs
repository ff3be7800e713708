//! Error types for the eight-puzzle crate.
//!
//! Running out of node budget during a search is not an error; see
//! [`crate::solver::SearchOutcome`].

use crate::engine::Move;
use thiserror::Error;

/// Main error type for the eight-puzzle crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid puzzle state: expected 9 tiles, got {got}")]
    InvalidStateLength { got: usize },

    #[error("invalid puzzle state: tile {value} is out of range (must be 0-8)")]
    TileOutOfRange { value: u32 },

    #[error("invalid puzzle state: tile {value} appears more than once")]
    DuplicateTile { value: u8 },

    #[error("invalid puzzle state: '{token}' is not a tile number")]
    InvalidTileToken { token: String },

    #[error("illegal move: cannot move {direction} with the blank at index {blank}")]
    IllegalMove { direction: Move, blank: usize },

    #[error("unknown move '{name}' (expected up, down, left or right)")]
    UnknownMove { name: String },

    #[error("invalid heuristic '{name}' (expected h1 or h2)")]
    UnknownHeuristic { name: String },

    #[error("unknown search strategy '{name}' (expected BFS, DFS or A*)")]
    UnknownStrategy { name: String },

    #[error("node budget must be at least 1")]
    InvalidBudget,

    #[error("invalid command: {message}")]
    InvalidCommand { message: String },

    #[error("unknown command '{name}'")]
    UnknownCommand { name: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }

    pub(crate) fn invalid_command(message: impl Into<String>) -> Self {
        Error::InvalidCommand {
            message: message.into(),
        }
    }
}
