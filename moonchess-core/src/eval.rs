//! Win and draw detection over a board snapshot

use crate::board::{Board, Cell, Player};

/// The 8 winning lines: rows top to bottom, columns left to right,
/// then the two diagonals
pub const WIN_LINES: [[u8; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Mark holding a complete line, if any
///
/// Lines are checked in `WIN_LINES` order; the first complete line
/// decides. A line broken by piece removal no longer counts.
pub fn winner(board: &Board) -> Option<Player> {
    for &line in &WIN_LINES {
        let [a, b, c] = line.map(|i| board.get(Cell::new(i).expect("line index in range")));
        if a.is_some() && a == b && b == c {
            return a;
        }
    }
    None
}

/// True when every cell is occupied and nobody has won
///
/// A full board is unreachable while the global cap evicts pieces;
/// this is kept for eviction-free board snapshots.
pub fn is_draw(board: &Board) -> bool {
    board.live_count() == 9 && winner(board).is_none()
}
