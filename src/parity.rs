//! Solvability test by permutation parity.

use crate::{Board, BLANK};

/// Pairs of non-blank tiles that appear in the opposite of their goal order.
pub fn inversions(board: &Board) -> usize {
    let tiles = board.tiles();
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &t)| t != BLANK)
        .map(|(i, &t)| {
            tiles[i + 1..]
                .iter()
                .filter(|&&next| next != BLANK && next < t)
                .count()
        })
        .sum()
}

/// Whether the goal board is reachable from `board`.
///
/// Odd sizes need an even inversion count. Even sizes need
/// `inversions + blank row` to be odd, counting rows from the top.
pub fn is_solvable(board: &Board) -> bool {
    let inversions = inversions(board);
    if board.size() % 2 == 1 {
        inversions % 2 == 0
    } else {
        let blank_row = board.position(board.blank_index()).0 as usize;
        (inversions + blank_row) % 2 == 1
    }
}
