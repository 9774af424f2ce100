use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Dark,
    Light,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Dark, Color::Light];

    pub fn opponent(self) -> Color {
        match self {
            Color::Dark => Color::Light,
            Color::Light => Color::Dark,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Color::Dark => 0,
            Color::Light => 1,
        }
    }

    /// Protocol code: 1 for dark (moves first), 2 for light.
    pub fn code(self) -> u8 {
        match self {
            Color::Dark => 1,
            Color::Light => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Color> {
        match code {
            1 => Some(Color::Dark),
            2 => Some(Color::Light),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Dark => f.write_str("dark"),
            Color::Light => f.write_str("light"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Dark,
    Light,
}

impl Cell {
    /// Serialized cell value: 0 empty, 1 dark, 2 light.
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Dark => 1,
            Cell::Light => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Cell> {
        match code {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Dark),
            2 => Some(Cell::Light),
            _ => None,
        }
    }

    #[inline]
    pub fn is(self, color: Color) -> bool {
        self == Cell::from(color)
    }

    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Dark => Some(Color::Dark),
            Cell::Light => Some(Color::Light),
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Dark => Cell::Dark,
            Color::Light => Cell::Light,
        }
    }
}

/// A disk placement, 0-indexed from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

/// Compass directions as (row delta, col delta).
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
