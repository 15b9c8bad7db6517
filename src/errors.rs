//! Error types for grid construction, tracing and the command line front end.

use thiserror::Error;

/// Errors raised by the grid and the tracing core
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("position ({row},{col}) is outside the {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },
    #[error("grid has no letters")]
    Empty,
    #[error("{len} letters cannot form a square grid")]
    NotSquare { len: usize },
    #[error("row {row} has {len} letters, expected {size}")]
    RaggedRow { row: usize, len: usize, size: usize },
}

/// Errors raised by the command line front end: input resolution, validation and output
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Undefined argument \"{0}\"! Aborting...")]
    Undefined(&'static str),
    #[error("\"{0}\" must contain only letters!")]
    NotAlphabetic(&'static str),
    #[error("\"Matrix\" has wrong characters number ({len})! Must be a string of size N^2, that describes square matrix of characters N*N")]
    WrongCharCount { len: usize },
    #[error("Improper \"Word\" length {actual}! Must be equal to the square root of the \"Matrix\" length ({expected})")]
    WrongWordLength { expected: usize, actual: usize },
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Whether asking the user again can fix the problem
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::NotAlphabetic(_) | Self::WrongCharCount { .. } | Self::WrongWordLength { .. }
        )
    }
}
