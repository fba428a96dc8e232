//! Minimax Chess Engine
//!
//! Fixed-depth minimax with alpha-beta pruning and a material plus
//! piece-square evaluation. The search itself is generic over the rules
//! (`RulesEngine`) so it can be tested against scripted trees; this crate
//! wires it to standard chess through `StandardRules`.

pub mod config;
pub mod error;
pub mod eval;
pub mod pst;
pub mod rules;
pub mod search;

use chess_core::{Color, Engine, Position, SearchResult};
use tracing::warn;

pub use config::{EngineConfig, EvalConfig};
pub use error::{ConfigError, RulesError, SearchError};
pub use eval::{EvalTables, Evaluator, evaluate};
pub use rules::{GameStatus, RulesEngine, StandardRules};
pub use search::{
    Evaluate, INFINITY, MATE_SCORE, MoveOrder, SearchOutcome, SearchStats, Searcher, search,
};


/// Chess engine around the alpha-beta searcher.
///
/// White is always the maximizing side, so `SearchResult::score` reads the
/// same way whichever colour the engine plays.
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    evaluator: Evaluator,
    move_order: MoveOrder,
    depth: u8,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self {
            evaluator: Evaluator::default(),
            move_order: MoveOrder::Enumeration,
            depth: config::DEFAULT_DEPTH,
            nodes: 0,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            evaluator: Evaluator::new(config.eval_tables()?),
            move_order: config.move_order,
            depth: config.depth,
            nodes: 0,
        })
    }

    /// Configured search depth, used by `best_move`.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Searches `pos` at the configured depth.
    pub fn best_move(&mut self, pos: &Position) -> Result<SearchResult, SearchError> {
        self.search(pos, self.depth)
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MinimaxEngine {
    type Error = SearchError;

    fn search(&mut self, pos: &Position, depth: u8) -> Result<SearchResult, SearchError> {
        let maximizing = pos.side_to_move == Color::White;
        let outcome = Searcher::new(&StandardRules, self.evaluator())
            .with_move_order(self.move_order)
            .search(pos, i32::from(depth), maximizing)?;
        self.nodes = outcome.stats.nodes;

        Ok(SearchResult {
            best_move: outcome.best_move,
            score: outcome.score,
            depth,
            nodes: self.nodes,
        })
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        match name {
            "Depth" => match value.parse::<u8>() {
                Ok(d) if (1..=config::MAX_DEPTH).contains(&d) => {
                    self.depth = d;
                    true
                }
                _ => {
                    warn!(value, "ignoring out-of-range Depth option");
                    false
                }
            },
            "MoveOrder" => match value.parse() {
                Ok(order) => {
                    self.move_order = order;
                    true
                }
                Err(err) => {
                    warn!(%err, "ignoring MoveOrder option");
                    false
                }
            },
            _ => false,
        }
    }
}
