use crate::{Board, Cost, Tile, Vec2, BLANK};

/// Home cell of a non-blank tile on a board of side `size`.
pub fn goal_position(tile: Tile, size: u8) -> Vec2 {
    debug_assert_ne!(tile, BLANK);
    let rank = tile as usize - 1;
    let size = size as usize;
    Vec2((rank / size) as u8, (rank % size) as u8)
}

/// Sum of every non-blank tile's grid distance to its home cell.
///
/// One slide moves one tile by one cell, so this never overestimates and
/// changes by exactly one per slide.
pub fn manhattan(board: &Board) -> Cost {
    board
        .cells()
        .filter(|&(_, tile)| tile != BLANK)
        .map(|(Vec2(x, y), tile)| {
            let Vec2(gx, gy) = goal_position(tile, board.size());
            (x.abs_diff(gx) + y.abs_diff(gy)) as Cost
        })
        .sum()
}
