//! The boundary between the search and the rules of the game.
//!
//! The search never looks inside a position or a move. Everything it needs
//! (move lists, successor positions, check status) comes through
//! `RulesEngine`, which lets it run against chess or against a scripted tree.

use std::fmt;

use chess_core::{Color, Move, Position};

use crate::error::RulesError;

/// Outcome of a position as far as the search is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { loser: Color },
    Stalemate,
}

pub trait RulesEngine {
    type Position: Clone;
    type Move: Clone + fmt::Debug;

    /// Legal moves in a stable, deterministic order. Empty at terminal positions.
    fn legal_moves(&self, pos: &Self::Position) -> Vec<Self::Move>;

    /// The position after `mv`. Must not modify `pos`, and must reject any
    /// move that `legal_moves(pos)` would not produce.
    fn apply(&self, pos: &Self::Position, mv: &Self::Move) -> Result<Self::Position, RulesError>;

    /// Whether the side to move is in check.
    fn in_check(&self, pos: &Self::Position) -> bool;

    fn side_to_move(&self, pos: &Self::Position) -> Color;

    /// Move-ordering hint. Rules without a notion of capture keep the default.
    fn is_capture(&self, _pos: &Self::Position, _mv: &Self::Move) -> bool {
        false
    }

    /// Classifies `pos` given its already generated legal moves.
    fn classify(&self, pos: &Self::Position, moves: &[Self::Move]) -> GameStatus {
        if !moves.is_empty() {
            GameStatus::Ongoing
        } else if self.in_check(pos) {
            GameStatus::Checkmate {
                loser: self.side_to_move(pos),
            }
        } else {
            GameStatus::Stalemate
        }
    }

    fn status(&self, pos: &Self::Position) -> GameStatus {
        let moves = self.legal_moves(pos);
        self.classify(pos, &moves)
    }
}

/// Standard chess rules from `chess_core`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

impl RulesEngine for StandardRules {
    type Position = Position;
    type Move = Move;

    fn legal_moves(&self, pos: &Position) -> Vec<Move> {
        chess_core::legal_moves(pos)
    }

    fn apply(&self, pos: &Position, mv: &Move) -> Result<Position, RulesError> {
        Ok(chess_core::play(pos, *mv)?)
    }

    fn in_check(&self, pos: &Position) -> bool {
        pos.in_check(pos.side_to_move)
    }

    fn side_to_move(&self, pos: &Position) -> Color {
        pos.side_to_move
    }

    fn is_capture(&self, pos: &Position, mv: &Move) -> bool {
        chess_core::is_capture(pos, *mv)
    }
}
