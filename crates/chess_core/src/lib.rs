//! Chess rules: position model, FEN setup, legal move generation and
//! check detection, plus the `Engine` trait drivers use to ask an engine
//! for a move.

pub mod board;
pub mod error;
pub mod movegen;
pub mod perft;
pub mod types;
pub mod uci;

pub use board::*;
pub use error::{FenError, MoveError};
pub use movegen::*;
pub use perft::perft;
pub use types::*;
pub use uci::*;

// =============================================================================
// Engine trait, implemented by move-picking engines
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation score from White's point of view
    pub score: i32,
    /// Search depth in plies
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Trait that chess engines implement so a driver (GUI, match runner)
/// can swap between them.
pub trait Engine: Send {
    type Error: std::error::Error;

    /// Search the position to a fixed depth.
    ///
    /// # Arguments
    /// * `pos` - The current position to analyze
    /// * `depth` - Search depth in plies
    ///
    /// # Returns
    /// SearchResult containing best move, score, and statistics
    fn search(&mut self, pos: &Position, depth: u8) -> Result<SearchResult, Self::Error>;

    /// Returns the engine's name
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "ML-chess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}

    /// Optional: Set an engine option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
