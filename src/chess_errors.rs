//! Errors used throughout the move engine.
//!
//! `ChessErrors` is the single error type returned by board access, move
//! validation, placement parsing and the text front-end. An illegal move is
//! *not* an error: validation answers `Ok(false)` and leaves state untouched.
//! Errors are reserved for inputs that can never describe a square or a
//! position.
//!
//! Usage guidelines:
//! - `OutOfBounds` is a precondition violation by the caller (a square
//!   outside the 8x8 grid). Library code never produces such squares itself.
//! - `InvalidPlacement` and `InvalidCommand` come from user-supplied text and
//!   are suitable for presenting back to the user.

use thiserror::Error;

/// Unified error type for the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A square coordinate fell outside `0..8` on either axis.
    ///
    /// Payload: the offending (row, col) pair as given by the caller.
    #[error("square ({row}, {col}) is outside the 8x8 board")]
    OutOfBounds { row: i32, col: i32 },

    /// A piece-placement string (for example `rnbqkbnr/pppppppp/8/...`) could
    /// not be interpreted as a board.
    #[error("invalid piece placement: {0}")]
    InvalidPlacement(String),

    /// A front-end command line could not be parsed.
    #[error("invalid command: {0}")]
    InvalidCommand(String),
}

/// Result alias for engine operations.
pub type ChessResult<T> = Result<T, ChessErrors>;
