//! Classical Othello Engine
//!
//! Depth-limited minimax or alpha-beta search over a weighted
//! material / mobility / corner heuristic, with optional per-search leaf
//! caching and move ordering.

mod cache;
mod eval;
mod search;

use othello_core::{Board, Color, Engine, SearchConfig, SearchResult};

/// Classical Othello engine.
///
/// This engine uses:
/// - Minimax or alpha-beta pruning, chosen per search
/// - A weighted heuristic (or plain disk difference) at the leaves
/// - A transposition cache owned by the engine and reset around every search
/// - Optional best-first move ordering for alpha-beta
#[derive(Debug, Default)]
pub struct ClassicalEngine {
    leaf_eval: LeafEval,
    heuristic: Heuristic,
    cache: TranspositionCache,
    /// Node counter of the last search, for statistics
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: HeuristicWeights) -> Self {
        Self {
            heuristic: Heuristic::new(weights),
            ..Self::default()
        }
    }

    /// Selects the leaf scorer. `Material` scores leaves by disk difference
    /// alone.
    pub fn with_leaf_eval(mut self, leaf_eval: LeafEval) -> Self {
        self.leaf_eval = leaf_eval;
        self
    }

    pub fn weights(&self) -> &HeuristicWeights {
        &self.heuristic.weights
    }

    pub fn leaf_eval(&self) -> LeafEval {
        self.leaf_eval
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, board: &Board, color: Color, config: &SearchConfig) -> SearchResult {
        let outcome = match self.leaf_eval {
            LeafEval::Heuristic => {
                select_move(board, color, config, &self.heuristic, &mut self.cache)
            }
            LeafEval::Material => select_move(board, color, config, &Material, &mut self.cache),
        };
        self.nodes = outcome.stats.nodes;

        SearchResult {
            best_move: outcome.best_move,
            score: outcome.value,
            depth: config.depth,
            stats: outcome.stats,
        }
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }

    fn new_game(&mut self) {
        self.cache.clear();
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use cache::TranspositionCache;
pub use eval::{
    corners, evaluate, material, mobility_diff, Evaluator, Heuristic, HeuristicWeights, LeafEval,
    Material, WeightsError,
};
pub use search::{select_move, NodeKind, SearchOutcome};
