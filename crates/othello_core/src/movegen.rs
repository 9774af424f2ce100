use crate::{board::Board, error::BoardError, types::*};

/// Disks `color` would flip by placing at `mv`. Empty when the placement is
/// illegal (occupied, out of bounds or no bracketed line).
pub fn flips(board: &Board, color: Color, mv: Move) -> Vec<Move> {
    let mut flipped = Vec::new();
    if !board.contains(mv) || board.cell(mv) != Cell::Empty {
        return flipped;
    }
    for (dr, dc) in DIRECTIONS {
        let start = flipped.len();
        let mut cur = mv;
        loop {
            let Some(next) = step(board, cur, dr, dc) else {
                flipped.truncate(start);
                break;
            };
            match board.cell(next).color() {
                Some(c) if c == color.opponent() => {
                    flipped.push(next);
                    cur = next;
                }
                Some(_) => break, // own disk closes the line
                None => {
                    flipped.truncate(start);
                    break;
                }
            }
        }
    }
    flipped
}

#[inline]
fn step(board: &Board, from: Move, dr: isize, dc: isize) -> Option<Move> {
    let row = from.row.checked_add_signed(dr)?;
    let col = from.col.checked_add_signed(dc)?;
    let mv = Move::new(row, col);
    board.contains(mv).then_some(mv)
}

fn has_flips(board: &Board, color: Color, mv: Move) -> bool {
    if board.cell(mv) != Cell::Empty {
        return false;
    }
    DIRECTIONS.iter().any(|&(dr, dc)| {
        let mut cur = mv;
        let mut seen_opponent = false;
        while let Some(next) = step(board, cur, dr, dc) {
            match board.cell(next).color() {
                Some(c) if c == color => return seen_opponent,
                Some(_) => seen_opponent = true,
                None => return false,
            }
            cur = next;
        }
        false
    })
}

/// Appends every legal placement for `color`, scanning rows top to bottom and
/// columns left to right.
pub fn legal_moves_into(board: &Board, color: Color, moves: &mut Vec<Move>) {
    let n = board.size();
    for row in 0..n {
        for col in 0..n {
            let mv = Move::new(row, col);
            if has_flips(board, color, mv) {
                moves.push(mv);
            }
        }
    }
}

pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(32);
    legal_moves_into(board, color, &mut moves);
    moves
}

pub fn mobility(board: &Board, color: Color) -> usize {
    legal_moves(board, color).len()
}

/// Plays `mv` for `color` on a copy of `board`, flipping every bracketed line.
pub fn apply_move(board: &Board, color: Color, mv: Move) -> Result<Board, BoardError> {
    if !board.contains(mv) {
        return Err(BoardError::OutOfBounds(mv));
    }
    if board.cell(mv) != Cell::Empty {
        return Err(BoardError::Occupied(mv));
    }
    let flipped = flips(board, color, mv);
    if flipped.is_empty() {
        return Err(BoardError::NoFlips(mv));
    }
    Ok(place(board, color, mv, &flipped))
}

fn place(board: &Board, color: Color, mv: Move, flipped: &[Move]) -> Board {
    let mut next = board.clone();
    next.set(mv, color.into());
    for &sq in flipped {
        next.set(sq, color.into());
    }
    next
}

/// Every legal move for `color` paired with the board it produces, in
/// [`legal_moves`] order.
pub fn successors(board: &Board, color: Color) -> Vec<(Move, Board)> {
    legal_moves(board, color)
        .into_iter()
        .map(|mv| {
            let flipped = flips(board, color, mv);
            (mv, place(board, color, mv, &flipped))
        })
        .collect()
}

/// Disk counts as (dark, light).
pub fn score(board: &Board) -> (usize, usize) {
    (board.count(Color::Dark), board.count(Color::Light))
}

/// Neither side can place a disk.
pub fn is_game_over(board: &Board) -> bool {
    Color::ALL.iter().all(|&c| mobility(board, c) == 0)
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
