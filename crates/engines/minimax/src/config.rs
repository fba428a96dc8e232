//! Engine configuration loaded from TOML.
//!
//! Every field is optional; anything left out keeps the built-in value.
//!
//! ```toml
//! depth = 4
//! move_order = "captures-first"
//!
//! [eval.material]
//! queen = 10
//!
//! [eval.positional]
//! knight = [ ...64 entries, a1 first... ]
//! ```

use std::path::Path;

use chess_core::PieceKind;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;
use crate::eval::EvalTables;
use crate::pst;
use crate::search::{MATE_SCORE, MoveOrder};

pub const DEFAULT_DEPTH: u8 = 3;
pub const MAX_DEPTH: u8 = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Search depth in plies
    pub depth: u8,
    pub move_order: MoveOrder,
    pub eval: EvalConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            move_order: MoveOrder::Enumeration,
            eval: EvalConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        info!(
            path = %path.display(),
            depth = config.depth,
            move_order = ?config.move_order,
            "loaded engine config"
        );
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_DEPTH).contains(&self.depth) {
            return Err(ConfigError::DepthOutOfRange {
                depth: self.depth,
                max: MAX_DEPTH,
            });
        }
        self.eval.tables().map(|_| ())
    }

    pub fn eval_tables(&self) -> Result<EvalTables, ConfigError> {
        self.eval.tables()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EvalConfig {
    pub material: MaterialConfig,
    pub positional: PositionalConfig,
}

/// Base piece values. Must all be positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaterialConfig {
    pub pawn: i32,
    pub knight: i32,
    pub bishop: i32,
    pub rook: i32,
    pub queen: i32,
    pub king: i32,
}

impl Default for MaterialConfig {
    fn default() -> Self {
        let [pawn, knight, bishop, rook, queen, king] = pst::MATERIAL;
        Self {
            pawn,
            knight,
            bishop,
            rook,
            queen,
            king,
        }
    }
}

/// Optional 64-entry overrides of the built-in piece-square tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PositionalConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pawn: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knight: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bishop: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rook: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queen: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub king: Option<Vec<i32>>,
}

impl EvalConfig {
    /// Builds the evaluator tables, checking sizes and signs. The tables must
    /// never add up to a checkmate score.
    pub fn tables(&self) -> Result<EvalTables, ConfigError> {
        let mut tables = EvalTables::DEFAULT;

        let m = &self.material;
        let p = &self.positional;
        let per_kind = [
            (PieceKind::Pawn, m.pawn, &p.pawn),
            (PieceKind::Knight, m.knight, &p.knight),
            (PieceKind::Bishop, m.bishop, &p.bishop),
            (PieceKind::Rook, m.rook, &p.rook),
            (PieceKind::Queen, m.queen, &p.queen),
            (PieceKind::King, m.king, &p.king),
        ];

        for (kind, value, table) in per_kind {
            if value <= 0 {
                return Err(ConfigError::NonPositiveMaterial {
                    piece: kind.name(),
                    value,
                });
            }
            tables.material[kind.idx()] = value;

            if let Some(entries) = table {
                tables.positional[kind.idx()] =
                    entries
                        .as_slice()
                        .try_into()
                        .map_err(|_| ConfigError::TableSize {
                            piece: kind.name(),
                            len: entries.len(),
                        })?;
            }
        }

        let bound = tables.score_bound();
        if bound >= i64::from(MATE_SCORE) {
            return Err(ConfigError::EvalOutOfRange {
                bound,
                limit: MATE_SCORE,
            });
        }

        Ok(tables)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
