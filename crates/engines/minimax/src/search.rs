//! Minimax search with alpha-beta pruning
//!
//! The search is generic over the rules (`RulesEngine`) and the static
//! evaluation (`Evaluate`), so it can run on real chess positions or on a
//! scripted tree. White maximizes, Black minimizes; scores are never negated
//! between plies.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::SearchError;
use crate::rules::{GameStatus, RulesEngine};

/// Score of a checkmate, from the winner's side. Dominates any material sum.
pub const MATE_SCORE: i32 = 1_000_000;

/// Initial alpha-beta window bound. Strictly larger than `MATE_SCORE`.
pub const INFINITY: i32 = 10_000_000;

/// Static evaluation of a position, positive for the maximizer.
pub trait Evaluate<P> {
    fn evaluate(&self, pos: &P) -> i32;
}

impl<P, F> Evaluate<P> for F
where
    F: Fn(&P) -> i32,
{
    fn evaluate(&self, pos: &P) -> i32 {
        self(pos)
    }
}

/// Order in which the children of a node are expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoveOrder {
    /// Exactly as the rules engine enumerates them.
    #[default]
    Enumeration,
    /// Captures first, otherwise enumeration order (stable).
    CapturesFirst,
}

impl FromStr for MoveOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "enumeration" => Ok(MoveOrder::Enumeration),
            "captures-first" | "capturesfirst" => Ok(MoveOrder::CapturesFirst),
            other => Err(format!("unknown move order '{other}'")),
        }
    }
}

/// Work counters for one root search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Every node entered, root included
    pub nodes: u64,
    /// Nodes scored by the evaluator at the depth frontier
    pub leaves: u64,
    /// Sibling lists abandoned by an alpha or beta cutoff
    pub cutoffs: u64,
}

/// What a root search found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<M> {
    pub score: i32,
    /// None at depth 0 or when the root has no legal moves
    pub best_move: Option<M>,
    pub stats: SearchStats,
}

/// Searches `pos` to `depth` plies and returns the best move for the side
/// to move with its score.
///
/// `maximizing` says whether the side to move at the root is the maximizer
/// (White). A negative depth is rejected with `SearchError::InvalidDepth`.
pub fn search<R, E>(
    rules: &R,
    evaluator: &E,
    pos: &R::Position,
    depth: i32,
    maximizing: bool,
) -> Result<SearchOutcome<R::Move>, SearchError>
where
    R: RulesEngine,
    E: Evaluate<R::Position>,
{
    Searcher::new(rules, evaluator).search(pos, depth, maximizing)
}

/// A configurable alpha-beta search over borrowed rules and evaluator.
///
/// Holds no state between root searches apart from its settings; the
/// statistics are reset by every call to `search`.
pub struct Searcher<'a, R, E> {
    rules: &'a R,
    evaluator: &'a E,
    order: MoveOrder,
    stats: SearchStats,
}

impl<'a, R, E> Searcher<'a, R, E>
where
    R: RulesEngine,
    E: Evaluate<R::Position>,
{
    pub fn new(rules: &'a R, evaluator: &'a E) -> Self {
        Self {
            rules,
            evaluator,
            order: MoveOrder::Enumeration,
            stats: SearchStats::default(),
        }
    }

    pub fn with_move_order(mut self, order: MoveOrder) -> Self {
        self.order = order;
        self
    }

    pub fn search(
        &mut self,
        pos: &R::Position,
        depth: i32,
        maximizing: bool,
    ) -> Result<SearchOutcome<R::Move>, SearchError> {
        if depth < 0 {
            return Err(SearchError::InvalidDepth { depth });
        }
        self.stats = SearchStats::default();

        let (score, best_move) =
            self.alpha_beta(pos, depth as u32, -INFINITY, INFINITY, maximizing)?;

        debug!(
            depth,
            maximizing,
            score,
            best_move = ?best_move,
            nodes = self.stats.nodes,
            leaves = self.stats.leaves,
            cutoffs = self.stats.cutoffs,
            "search finished"
        );

        Ok(SearchOutcome {
            score,
            best_move,
            stats: self.stats,
        })
    }

    /// Returns the node's score and the move made here that produced it.
    ///
    /// A child's own best move is discarded: the parent pairs the child's
    /// score with the move that led to the child.
    fn alpha_beta(
        &mut self,
        pos: &R::Position,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> Result<(i32, Option<R::Move>), SearchError> {
        self.stats.nodes += 1;

        if depth == 0 {
            self.stats.leaves += 1;
            return Ok((self.evaluator.evaluate(pos), None));
        }

        let mut moves = self.rules.legal_moves(pos);
        match self.rules.classify(pos, &moves) {
            GameStatus::Ongoing => {}
            GameStatus::Checkmate { .. } => {
                let score = if maximizing { -MATE_SCORE } else { MATE_SCORE };
                return Ok((score, None));
            }
            GameStatus::Stalemate => return Ok((0, None)),
        }

        if self.order == MoveOrder::CapturesFirst {
            // sort_by_key is stable, so ties keep enumeration order
            moves.sort_by_key(|mv| !self.rules.is_capture(pos, mv));
        }

        let mut best = if maximizing { -INFINITY } else { INFINITY };
        let mut best_move = None;

        for mv in moves {
            let child = self.rules.apply(pos, &mv)?;
            let (score, _) = self.alpha_beta(&child, depth - 1, alpha, beta, !maximizing)?;

            // The first child always counts, even at or past the window edge
            if maximizing {
                if best_move.is_none() || score > best {
                    best = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(best);
                if best >= beta {
                    self.stats.cutoffs += 1;
                    trace!(depth, best, beta, "beta cutoff");
                    break;
                }
            } else {
                if best_move.is_none() || score < best {
                    best = score;
                    best_move = Some(mv);
                }
                beta = beta.min(best);
                if best <= alpha {
                    self.stats.cutoffs += 1;
                    trace!(depth, best, alpha, "alpha cutoff");
                    break;
                }
            }
        }

        Ok((best, best_move))
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
