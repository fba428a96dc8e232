//! Error types for the minimax engine

use std::path::PathBuf;

use chess_core::MoveError;
use thiserror::Error;

/// A rules engine was handed a move it did not generate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    #[error("illegal move applied: {mv}")]
    IllegalMove { mv: String },
}

impl From<MoveError> for RulesError {
    fn from(err: MoveError) -> Self {
        match err {
            MoveError::Illegal { mv } => RulesError::IllegalMove { mv },
        }
    }
}

/// Errors returned by a search. Both signal a caller bug; running out of
/// legal moves is a normal result, not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("search depth must be non-negative, got {depth}")]
    InvalidDepth { depth: i32 },

    #[error(transparent)]
    Rules(#[from] RulesError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("{piece} positional table has {len} entries, expected 64")]
    TableSize { piece: &'static str, len: usize },

    #[error("{piece} material value must be positive, got {value}")]
    NonPositiveMaterial { piece: &'static str, value: i32 },

    #[error("evaluation tables can reach {bound}, must stay below {limit}")]
    EvalOutOfRange { bound: i64, limit: i32 },

    #[error("depth {depth} is outside 1..={max}")]
    DepthOutOfRange { depth: u8, max: u8 },
}
