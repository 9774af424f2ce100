//! Search configuration shared by the driver and every engine.
//!
//! The controller hands the agent a depth limit and three flags at startup;
//! this module turns those into typed values engines can rely on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How many plies a search may descend below the root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DepthLimit {
    /// Stop after this many plies. `Plies(0)` evaluates the root directly.
    Plies(u32),
    /// Keep going until the side to move has no legal move.
    Unbounded,
}

impl DepthLimit {
    /// Protocol encoding: any negative value means unbounded.
    pub fn from_protocol(limit: i64) -> Self {
        if limit < 0 {
            DepthLimit::Unbounded
        } else {
            DepthLimit::Plies(u32::try_from(limit).unwrap_or(u32::MAX))
        }
    }

    #[inline]
    pub fn is_exhausted(self) -> bool {
        self == DepthLimit::Plies(0)
    }

    /// Remaining budget one ply further down.
    #[inline]
    pub fn next(self) -> Self {
        match self {
            DepthLimit::Plies(n) => DepthLimit::Plies(n.saturating_sub(1)),
            DepthLimit::Unbounded => DepthLimit::Unbounded,
        }
    }
}

impl fmt::Display for DepthLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepthLimit::Plies(n) => write!(f, "{n}"),
            DepthLimit::Unbounded => f.write_str("unbounded"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    Minimax,
    AlphaBeta,
}

impl Algorithm {
    /// Protocol flag: 1 selects minimax, anything else alpha-beta.
    pub fn from_flag(flag: i64) -> Self {
        if flag == 1 {
            Algorithm::Minimax
        } else {
            Algorithm::AlphaBeta
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Minimax => f.write_str("MINIMAX"),
            Algorithm::AlphaBeta => f.write_str("ALPHA-BETA"),
        }
    }
}

/// Everything a single move selection needs besides the board and color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub depth: DepthLimit,
    pub algorithm: Algorithm,
    /// Memoize leaf scores by board for the duration of one search.
    pub caching: bool,
    /// Alpha-beta only: try Max-node moves best-first by successor score.
    pub ordering: bool,
    /// Alpha-beta only, requires `ordering`: also try Min-node moves
    /// worst-first (ascending successor score).
    pub min_node_ordering: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DepthLimit::Plies(4),
            algorithm: Algorithm::AlphaBeta,
            caching: false,
            ordering: false,
            min_node_ordering: false,
        }
    }
}

impl SearchConfig {
    pub fn minimax(depth: DepthLimit) -> Self {
        Self {
            depth,
            algorithm: Algorithm::Minimax,
            ..Default::default()
        }
    }

    pub fn alpha_beta(depth: DepthLimit) -> Self {
        Self {
            depth,
            algorithm: Algorithm::AlphaBeta,
            ..Default::default()
        }
    }

    pub fn with_caching(mut self, caching: bool) -> Self {
        self.caching = caching;
        self
    }

    pub fn with_ordering(mut self, ordering: bool) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn with_min_node_ordering(mut self, enabled: bool) -> Self {
        self.min_node_ordering = enabled;
        self
    }

    /// Whether move ordering actually changes anything for this algorithm.
    pub fn orders_moves(&self) -> bool {
        self.ordering && self.algorithm == Algorithm::AlphaBeta
    }
}

#[cfg(test)]
#[path = "search_config_tests.rs"]
mod search_config_tests;
