use crate::{board::Board, movegen::successors, movegen::mobility, types::Color};

/// Pure perft leaf count.
/// A side without a legal move passes (one edge) if the opponent can still
/// move; when neither side can move the position is a leaf.
pub fn perft(board: &Board, color: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let children = successors(board, color);
    if children.is_empty() {
        if mobility(board, color.opponent()) == 0 {
            return 1;
        }
        return perft(board, color.opponent(), depth - 1);
    }

    children
        .iter()
        .map(|(_, child)| perft(child, color.opponent(), depth - 1))
        .sum()
}
