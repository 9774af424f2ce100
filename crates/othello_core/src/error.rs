//! Error types for board construction, move application and protocol parsing.

use thiserror::Error;

use crate::types::Move;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board must be a non-empty square grid, got {rows} rows with lengths {row_lengths:?}")]
    InvalidDimensions {
        rows: usize,
        row_lengths: Vec<usize>,
    },

    #[error("starting position needs an even side length of at least 4, got {0}")]
    InvalidStartSize(usize),

    #[error("cell ({row}, {col}) holds {value}, expected 0, 1 or 2")]
    InvalidCell { row: usize, col: usize, value: i64 },

    #[error("move {0} is outside the board")]
    OutOfBounds(Move),

    #[error("square {0} is already occupied")]
    Occupied(Move),

    #[error("move {0} flips no disks")]
    NoFlips(Move),
}

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("handshake must have 5 comma-separated fields, got {0}")]
    HandshakeFieldCount(usize),

    #[error("handshake field `{field}` is not an integer: {value:?}")]
    HandshakeField { field: &'static str, value: String },

    #[error("unknown player color {0}, expected 1 (dark) or 2 (light)")]
    UnknownColor(i64),

    #[error("malformed status line: {0:?}")]
    Status(String),

    #[error("malformed board text: {0}")]
    BoardSyntax(#[from] serde_json::Error),

    #[error("invalid board: {0}")]
    Board(#[from] BoardError),
}
