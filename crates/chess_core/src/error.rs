//! Error types for position setup and checked move application.

use thiserror::Error;

/// Reasons a FEN string can be rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("expected at least 4 fields, found {found}")]
    MissingFields { found: usize },

    #[error("expected 8 ranks, found {found}")]
    RankCount { found: usize },

    #[error("rank {rank} does not describe exactly 8 files")]
    FileCount { rank: usize },

    #[error("invalid piece character '{ch}'")]
    InvalidPiece { ch: char },

    #[error("invalid side to move '{field}'")]
    InvalidSideToMove { field: String },

    #[error("invalid castling character '{ch}'")]
    InvalidCastling { ch: char },

    #[error("invalid en-passant square '{field}'")]
    InvalidEnPassant { field: String },

    #[error("invalid move counter '{field}'")]
    InvalidCounter { field: String },
}

/// Errors from applying a move through the checked interface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("move {mv} is not legal in this position")]
    Illegal { mv: String },
}
