//! Position evaluation: disk material, mobility and corner occupancy.
//!
//! Every sub-score is antisymmetric: swapping the perspective color negates
//! it. Corners get the heaviest weight since a corner disk can never be
//! flipped back.

use othello_core::{mobility, Board, Cell, Color};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Weighting of the three sub-scores.
///
/// The default is 0.2 / 0.2 / 0.6. Other profiles (the 0.2 / 0.2 / 0.7 tune,
/// for instance) are loaded from TOML rather than hard-coded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeuristicWeights {
    pub material: f64,
    pub mobility: f64,
    pub corner: f64,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            material: 0.2,
            mobility: 0.2,
            corner: 0.6,
        }
    }
}

#[derive(Debug, Error)]
pub enum WeightsError {
    #[error("failed to read weight profile {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse weight profile: {0}")]
    Parse(#[from] toml::de::Error),
}

impl HeuristicWeights {
    pub fn from_toml_str(text: &str) -> Result<Self, WeightsError> {
        Ok(toml::from_str(text)?)
    }

    /// Loads a weight profile. Keys left out of the file keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WeightsError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| WeightsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

/// Disk difference: `color`'s disks minus the opponent's. Exact at the end
/// of the game.
pub fn material(board: &Board, color: Color) -> i32 {
    board.count(color) as i32 - board.count(color.opponent()) as i32
}

/// Legal move count difference. Zero when neither side can move.
pub fn mobility_diff(board: &Board, color: Color) -> i32 {
    let own = mobility(board, color) as i32;
    let theirs = mobility(board, color.opponent()) as i32;
    if own == 0 && theirs == 0 {
        return 0;
    }
    own - theirs
}

/// Corner ownership difference over exactly the four corners.
pub fn corners(board: &Board, color: Color) -> i32 {
    let (mut own, mut theirs) = (0, 0);
    for corner in board.corners() {
        match board.cell(corner) {
            Cell::Empty => {}
            c if c.is(color) => own += 1,
            _ => theirs += 1,
        }
    }
    own - theirs
}

/// Weighted heuristic from `color`'s perspective; higher is better for `color`.
pub fn evaluate(board: &Board, color: Color, weights: &HeuristicWeights) -> f64 {
    weights.material * f64::from(material(board, color))
        + weights.mobility * f64::from(mobility_diff(board, color))
        + weights.corner * f64::from(corners(board, color))
}

/// Scores boards for the search. Implementations must be pure functions of
/// `(board, color)`.
pub trait Evaluator {
    fn evaluate(&self, board: &Board, color: Color) -> f64;
}

/// The weighted material/mobility/corner heuristic.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Heuristic {
    pub weights: HeuristicWeights,
}

impl Heuristic {
    pub fn new(weights: HeuristicWeights) -> Self {
        Self { weights }
    }
}

impl Evaluator for Heuristic {
    fn evaluate(&self, board: &Board, color: Color) -> f64 {
        evaluate(board, color, &self.weights)
    }
}

/// Plain disk difference, the terminal utility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Material;

impl Evaluator for Material {
    fn evaluate(&self, board: &Board, color: Color) -> f64 {
        f64::from(material(board, color))
    }
}

impl<E: Evaluator + ?Sized> Evaluator for &E {
    fn evaluate(&self, board: &Board, color: Color) -> f64 {
        (**self).evaluate(board, color)
    }
}

/// Which evaluator scores leaves (and orders moves).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeafEval {
    #[default]
    Heuristic,
    Material,
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
