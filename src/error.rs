//! Error types for the checkers engine
//!
//! Everything here is raised at the boundary (coordinates, moves and
//! configuration coming from a caller). The search itself never fails.

use thiserror::Error;

use crate::board::Pos;

/// Errors that can occur when talking to the engine
#[derive(Error, Debug)]
pub enum CheckersError {
    /// Coordinate outside the 8x8 board
    #[error("Invalid coordinate: ({row}, {col}) (must be 0-7)")]
    InvalidCoordinate { row: i32, col: i32 },

    /// No piece at source square
    #[error("No piece at {pos}")]
    EmptySquare { pos: Pos },

    /// Destination is not among the piece's legal moves
    #[error("Illegal move: from {from} to {to}")]
    IllegalMove { from: Pos, to: Pos },

    /// Search depth must be at least one ply
    #[error("Invalid search depth: {0} (must be at least 1)")]
    InvalidDepth(i64),

    /// Unrecognised game mode answer
    #[error("Invalid mode: {0:?}")]
    InvalidMode(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, CheckersError>;
