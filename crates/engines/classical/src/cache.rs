//! Per-search memo of leaf scores keyed by board content.

use std::collections::HashMap;

use othello_core::{Board, Color};

/// Leaf-score cache for one top-level search.
///
/// Keys carry no color, so every entry must come from the same perspective.
/// The cache remembers which color filled it and [`clear`](Self::clear)
/// forgets it again; the engine clears before and after every search.
#[derive(Debug, Default)]
pub struct TranspositionCache {
    scores: HashMap<Board, f64>,
    perspective: Option<Color>,
}

impl TranspositionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        log::trace!("clearing transposition cache ({} entries)", self.scores.len());
        self.scores.clear();
        self.perspective = None;
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn get(&self, board: &Board) -> Option<f64> {
        self.scores.get(board).copied()
    }

    /// Returns the cached score for `board`, computing and storing it on a
    /// miss. The flag is true on a hit.
    pub fn get_or_insert_with(
        &mut self,
        board: &Board,
        color: Color,
        compute: impl FnOnce() -> f64,
    ) -> (f64, bool) {
        debug_assert!(
            self.perspective.map_or(true, |c| c == color),
            "cache filled for {:?} queried for {:?}",
            self.perspective,
            color
        );
        self.perspective = Some(color);

        if let Some(&score) = self.scores.get(board) {
            return (score, true);
        }
        let score = compute();
        self.scores.insert(board.clone(), score);
        (score, false)
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod cache_tests;
