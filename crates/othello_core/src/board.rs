use std::fmt;

use crate::error::BoardError;
use crate::types::*;

/// Immutable square Othello grid.
///
/// Two boards with the same cells compare and hash equal, which is what the
/// search cache keys on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>, // row-major
}

impl Board {
    /// Standard starting position: light on the main-diagonal centre squares,
    /// dark on the other two.
    pub fn initial(size: usize) -> Result<Self, BoardError> {
        if size < 4 || size % 2 != 0 {
            return Err(BoardError::InvalidStartSize(size));
        }
        Ok(Self::with_centre_disks(size))
    }

    /// The 8x8 starting position.
    pub fn standard() -> Self {
        Self::with_centre_disks(8)
    }

    fn with_centre_disks(size: usize) -> Self {
        let mut board = Self::empty(size);
        let lo = size / 2 - 1;
        let hi = size / 2;
        board.set(Move::new(lo, lo), Cell::Light);
        board.set(Move::new(hi, hi), Cell::Light);
        board.set(Move::new(lo, hi), Cell::Dark);
        board.set(Move::new(hi, lo), Cell::Dark);
        board
    }

    pub(crate) fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Builds a board from serialized rows of cell codes (0 empty, 1 dark, 2 light).
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self, BoardError> {
        let size = rows.len();
        if size == 0 || rows.iter().any(|r| r.len() != size) {
            return Err(BoardError::InvalidDimensions {
                rows: size,
                row_lengths: rows.iter().map(Vec::len).collect(),
            });
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                let cell = u8::try_from(value)
                    .ok()
                    .and_then(Cell::from_code)
                    .ok_or(BoardError::InvalidCell { row, col, value })?;
                cells.push(cell);
            }
        }
        Ok(Self { size, cells })
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn contains(&self, mv: Move) -> bool {
        mv.row < self.size && mv.col < self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Cell at an in-bounds coordinate.
    #[inline]
    pub fn cell(&self, mv: Move) -> Cell {
        self.cells[mv.row * self.size + mv.col]
    }

    #[inline]
    pub(crate) fn set(&mut self, mv: Move, cell: Cell) {
        self.cells[mv.row * self.size + mv.col] = cell;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// The four corner squares: top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> [Move; 4] {
        let last = self.size - 1;
        [
            Move::new(0, 0),
            Move::new(0, last),
            Move::new(last, 0),
            Move::new(last, last),
        ]
    }

    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|c| c.is(color)).count()
    }

    pub fn empties(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// Serialized form, the inverse of [`Board::from_rows`].
    pub fn to_codes(&self) -> Vec<Vec<i64>> {
        self.rows()
            .map(|row| row.iter().map(|c| i64::from(c.code())).collect())
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row
                .iter()
                .map(|c| match c {
                    Cell::Empty => '.',
                    Cell::Dark => 'X',
                    Cell::Light => 'O',
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
