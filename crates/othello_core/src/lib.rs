pub mod board;
pub mod error;
pub mod movegen;
pub mod perft;
pub mod protocol;
pub mod search_config;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use movegen::*;
pub use perft::perft;
pub use protocol::*;
pub use search_config::*;
pub use types::*;

// =============================================================================
// Engine trait: implemented by every move-selecting Othello engine
// =============================================================================

/// Work counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, root included
    pub nodes: u64,
    /// Leaf scores actually computed by the evaluator
    pub leaf_evals: u64,
    /// Leaf scores served from the transposition cache
    pub cache_hits: u64,
    /// Evaluator calls spent sorting moves
    pub ordering_evals: u64,
    /// Nodes that stopped iterating early on an alpha-beta bound
    pub cutoffs: u64,
}

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if the root is a leaf: no legal moves or depth 0)
    pub best_move: Option<Move>,
    /// Backed-up heuristic value from the searching player's perspective
    pub score: f64,
    /// Depth limit the search ran with
    pub depth: DepthLimit,
    pub stats: SearchStats,
}

/// Trait that all Othello engines must implement.
///
/// The driver only talks to engines through this trait, so alternative
/// search strategies can be dropped in without touching protocol code.
pub trait Engine {
    /// Choose a move for `color` on `board`.
    ///
    /// # Arguments
    /// * `board` - The position to analyze
    /// * `color` - The side to move, whose perspective scores are reported in
    /// * `config` - Depth limit, algorithm and optimisation flags
    fn search(&mut self, board: &Board, color: Color, config: &SearchConfig) -> SearchResult;

    /// Returns the engine's name for logs
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
