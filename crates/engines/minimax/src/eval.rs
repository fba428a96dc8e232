//! Material plus piece-square evaluation.
//!
//! Scores are always from White's point of view: positive favours White,
//! negative favours Black, whoever is to move.

use chess_core::{Color, Piece, PieceKind, Position, mirror_sq};

use crate::pst;
use crate::search::Evaluate;

/// Base value per piece kind, indexed by `PieceKind::idx()`.
pub type MaterialTable = [i32; 6];

/// Per piece kind, a bonus for each square in White's orientation.
pub type PositionalTable = [[i32; 64]; 6];

/// The tables the evaluator reads. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalTables {
    pub material: MaterialTable,
    pub positional: PositionalTable,
}

impl EvalTables {
    pub const DEFAULT: EvalTables = EvalTables {
        material: pst::MATERIAL,
        positional: pst::POSITIONAL,
    };

    /// Built-in material values with every positional bonus zeroed.
    pub fn material_only() -> Self {
        EvalTables {
            material: pst::MATERIAL,
            positional: [[0; 64]; 6],
        }
    }

    /// Material plus positional value of `pc` standing on `sq`, unsigned.
    #[inline]
    pub fn piece_value(&self, pc: Piece, sq: u8) -> i32 {
        let sq = match pc.color {
            Color::White => sq,
            Color::Black => mirror_sq(sq),
        };
        let kind = pc.kind.idx();
        self.material[kind] + self.positional[kind][sq as usize]
    }

    pub fn material_value(&self, kind: PieceKind) -> i32 {
        self.material[kind.idx()]
    }

    /// Largest absolute score these tables can produce: 32 pieces, each
    /// counted at the costliest kind and square.
    pub fn score_bound(&self) -> i64 {
        let worst = PieceKind::ALL
            .iter()
            .map(|&kind| {
                let idx = kind.idx();
                let square = self.positional[idx]
                    .iter()
                    .map(|&v| i64::from(v).abs())
                    .max()
                    .unwrap_or(0);
                i64::from(self.material[idx]).abs() + square
            })
            .max()
            .unwrap_or(0);
        32 * worst
    }

    fn score(&self, pos: &Position) -> i32 {
        let mut score = 0i32;
        for sq in 0..64u8 {
            if let Some(pc) = pos.piece_at(sq) {
                let v = self.piece_value(pc, sq);
                score += if pc.color == Color::White { v } else { -v };
            }
        }
        score
    }
}

impl Default for EvalTables {
    fn default() -> Self {
        Self::DEFAULT
    }
}

static DEFAULT_TABLES: EvalTables = EvalTables::DEFAULT;

/// Evaluates `pos` with the built-in tables.
pub fn evaluate(pos: &Position) -> i32 {
    DEFAULT_TABLES.score(pos)
}

/// Static evaluator over a fixed set of tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluator {
    tables: EvalTables,
}

impl Evaluator {
    pub fn new(tables: EvalTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &EvalTables {
        &self.tables
    }

    pub fn evaluate(&self, pos: &Position) -> i32 {
        self.tables.score(pos)
    }
}

impl Evaluate<Position> for Evaluator {
    fn evaluate(&self, pos: &Position) -> i32 {
        self.tables.score(pos)
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
