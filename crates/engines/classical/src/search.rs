//! Depth-limited minimax and alpha-beta search.
//!
//! Both algorithms share one recursive node function. A node is either a Max
//! node (the searching color moves) or a Min node (the opponent moves); both
//! return values from the searching color's perspective. Minimax is the same
//! walk with pruning switched off.

use othello_core::{
    successors, Algorithm, Board, Color, DepthLimit, Move, SearchConfig, SearchStats,
};

use crate::cache::TranspositionCache;
use crate::eval::Evaluator;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// The searching color is to move and maximizes.
    Max,
    /// The opponent is to move and minimizes the searching color's value.
    Min,
}

impl NodeKind {
    #[inline]
    fn flip(self) -> Self {
        match self {
            NodeKind::Max => NodeKind::Min,
            NodeKind::Min => NodeKind::Max,
        }
    }
}

/// Result of [`select_move`].
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Chosen move; `None` when the root has no legal move or the depth limit is 0
    pub best_move: Option<Move>,
    /// Backed-up value of the root
    pub value: f64,
    pub stats: SearchStats,
}

/// Searches `board` for `color` and returns the best move with its value.
///
/// The cache is cleared on entry and on exit, so nothing leaks between calls
/// even when successive calls search for different colors.
pub fn select_move<E: Evaluator>(
    board: &Board,
    color: Color,
    config: &SearchConfig,
    evaluator: &E,
    cache: &mut TranspositionCache,
) -> SearchOutcome {
    cache.clear();

    let mut searcher = Searcher {
        color,
        config,
        evaluator,
        cache: &mut *cache,
        stats: SearchStats::default(),
    };
    let (best_move, value) = searcher.node(
        board,
        NodeKind::Max,
        config.depth,
        f64::NEG_INFINITY,
        f64::INFINITY,
    );
    let stats = searcher.stats;

    cache.clear();

    log::debug!(
        "{} depth {} for {}: move {:?} value {:.3} | nodes {} leaves {} hits {} order-evals {} cutoffs {}",
        config.algorithm,
        config.depth,
        color,
        best_move,
        value,
        stats.nodes,
        stats.leaf_evals,
        stats.cache_hits,
        stats.ordering_evals,
        stats.cutoffs
    );

    SearchOutcome {
        best_move,
        value,
        stats,
    }
}

/// State threaded through one top-level search.
struct Searcher<'a, E: Evaluator> {
    color: Color,
    config: &'a SearchConfig,
    evaluator: &'a E,
    cache: &'a mut TranspositionCache,
    stats: SearchStats,
}

impl<E: Evaluator> Searcher<'_, E> {
    /// Recursive node search. `alpha` and `beta` are only consulted when the
    /// configured algorithm is alpha-beta.
    fn node(
        &mut self,
        board: &Board,
        kind: NodeKind,
        depth: DepthLimit,
        mut alpha: f64,
        mut beta: f64,
    ) -> (Option<Move>, f64) {
        self.stats.nodes += 1;

        if depth.is_exhausted() {
            return (None, self.leaf(board));
        }
        let mover = match kind {
            NodeKind::Max => self.color,
            NodeKind::Min => self.color.opponent(),
        };
        let mut children = successors(board, mover);
        if children.is_empty() {
            return (None, self.leaf(board));
        }

        if self.should_order(kind) {
            self.order(&mut children, kind);
        }

        let prune = self.config.algorithm == Algorithm::AlphaBeta;
        let mut best_move = None;
        let mut value = match kind {
            NodeKind::Max => f64::NEG_INFINITY,
            NodeKind::Min => f64::INFINITY,
        };

        for (mv, child) in children {
            let (_, child_value) = self.node(&child, kind.flip(), depth.next(), alpha, beta);

            // Strict comparison: the first of equally good moves is kept.
            let improves = match kind {
                NodeKind::Max => child_value > value,
                NodeKind::Min => child_value < value,
            };
            if improves {
                value = child_value;
                best_move = Some(mv);
            }

            if !prune {
                continue;
            }
            match kind {
                NodeKind::Max => {
                    if value >= beta {
                        self.stats.cutoffs += 1;
                        return (best_move, value);
                    }
                    alpha = alpha.max(value);
                }
                NodeKind::Min => {
                    if value <= alpha {
                        self.stats.cutoffs += 1;
                        return (best_move, value);
                    }
                    beta = beta.min(value);
                }
            }
        }

        (best_move, value)
    }

    /// Leaf value from the searching color's perspective, memoized when
    /// caching is on.
    fn leaf(&mut self, board: &Board) -> f64 {
        let color = self.color;
        let evaluator = self.evaluator;

        if !self.config.caching {
            self.stats.leaf_evals += 1;
            return evaluator.evaluate(board, color);
        }

        let (score, hit) = self
            .cache
            .get_or_insert_with(board, color, || evaluator.evaluate(board, color));
        if hit {
            self.stats.cache_hits += 1;
        } else {
            self.stats.leaf_evals += 1;
        }
        score
    }

    fn should_order(&self, kind: NodeKind) -> bool {
        self.config.orders_moves()
            && match kind {
                NodeKind::Max => true,
                NodeKind::Min => self.config.min_node_ordering,
            }
    }

    /// Sorts children by the evaluator's score of the resulting board: best
    /// first at Max nodes, worst first at Min nodes. The sort is stable, so
    /// ties keep move generation order.
    fn order(&mut self, children: &mut Vec<(Move, Board)>, kind: NodeKind) {
        self.stats.ordering_evals += children.len() as u64;

        let mut keyed: Vec<(f64, (Move, Board))> = children
            .drain(..)
            .map(|child| (self.evaluator.evaluate(&child.1, self.color), child))
            .collect();
        match kind {
            NodeKind::Max => keyed.sort_by(|a, b| b.0.total_cmp(&a.0)),
            NodeKind::Min => keyed.sort_by(|a, b| a.0.total_cmp(&b.0)),
        }
        children.extend(keyed.into_iter().map(|(_, child)| child));
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
