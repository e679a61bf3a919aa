use std::ops::Index;

use arrayvec::ArrayVec;
use thiserror::Error;

mod fmt;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod parity;
mod parse;
pub mod solve;
pub mod store;

/// A tile label. `BLANK` marks the empty cell.
pub type Tile = u8;

/// Number of slides along a path.
pub type Cost = u32;

pub const BLANK: Tile = 0;

/// Largest supported side length. Every label of a 16x16 board still fits a `Tile`.
pub const MAX_SIZE: u8 = 16;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
pub enum SlideError {
    #[error("tile {0} is not on the board")]
    NoSuchTile(Tile),
    #[error("tile {0} is not next to the blank")]
    NotAdjacent(Tile),
}

/// Row and column of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vec2(pub u8, pub u8);

/// The direction the blank travels in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up = 0,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub fn reversed(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A k*k board snapshot in row-major order.
///
/// The tiles are expected to be a permutation of `0..k*k`. This is not
/// checked here; the input parser and [`parity::is_solvable`] are the gates.
/// Boards are never mutated: every slide produces a fresh board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: u8,
    tiles: Box<[Tile]>,
}

impl Index<usize> for Board {
    type Output = Tile;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.tiles[idx]
    }
}

impl Index<Vec2> for Board {
    type Output = Tile;
    fn index(&self, pos: Vec2) -> &Self::Output {
        &self.tiles[self.index_of(pos)]
    }
}

impl Board {
    pub fn new(size: u8, tiles: Vec<Tile>) -> Self {
        debug_assert_eq!(tiles.len(), size as usize * size as usize);
        Self {
            size,
            tiles: tiles.into(),
        }
    }

    /// The solved board: `1..k*k` in order, blank in the last cell.
    pub fn goal(size: u8) -> Self {
        let len = size as usize * size as usize;
        let tiles = (1..len)
            .map(|v| v as Tile)
            .chain(std::iter::once(BLANK))
            .collect::<Box<[_]>>();
        Self { size, tiles }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn is_goal(&self) -> bool {
        match self.tiles.split_last() {
            Some((&BLANK, rest)) => rest.iter().zip(1usize..).all(|(&t, v)| t as usize == v),
            _ => false,
        }
    }

    pub fn index_of(&self, pos: Vec2) -> usize {
        pos.0 as usize * self.size as usize + pos.1 as usize
    }

    pub fn position(&self, idx: usize) -> Vec2 {
        let size = self.size as usize;
        Vec2((idx / size) as u8, (idx % size) as u8)
    }

    pub fn blank_index(&self) -> usize {
        self.tiles
            .iter()
            .position(|&t| t == BLANK)
            .expect("Board must contain a blank")
    }

    pub fn cells(&self) -> impl Iterator<Item = (Vec2, Tile)> + '_ {
        let idx_iter = std::iter::successors(Some(Vec2(0, 0)), |&Vec2(x, y)| {
            Some(if y + 1 < self.size {
                Vec2(x, y + 1)
            } else {
                Vec2(x + 1, 0)
            })
        });
        idx_iter.zip(self.tiles.iter().copied())
    }

    fn sibling_pos(&self, pos: Vec2, dir: Direction) -> Option<Vec2> {
        const DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        let x = pos.0.checked_add_signed(DIRECTIONS[dir as usize].0)?;
        let y = pos.1.checked_add_signed(DIRECTIONS[dir as usize].1)?;
        if self.size <= x || self.size <= y {
            return None;
        }
        Some(Vec2(x, y))
    }

    fn swapped(&self, a: usize, b: usize) -> Self {
        let mut tiles = self.tiles.clone();
        tiles.swap(a, b);
        Self {
            size: self.size,
            tiles,
        }
    }

    /// Move the blank one cell, or `None` when it would leave the grid.
    pub fn slide_blank(&self, dir: Direction) -> Option<Self> {
        self.slide_blank_with_tile(dir).map(|(board, _)| board)
    }

    fn slide_blank_with_tile(&self, dir: Direction) -> Option<(Self, Tile)> {
        let blank = self.blank_index();
        let target = self.index_of(self.sibling_pos(self.position(blank), dir)?);
        Some((self.swapped(blank, target), self.tiles[target]))
    }

    /// Every board one slide away, paired with the label of the tile that moved.
    ///
    /// Ordered by blank direction: up, down, left, right.
    pub fn successors(&self) -> ArrayVec<(Self, Tile), 4> {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| self.slide_blank_with_tile(dir))
            .collect()
    }

    /// Slide `tile` into the blank.
    pub fn slide_tile(&self, tile: Tile) -> Result<Self, SlideError> {
        let idx = self
            .tiles
            .iter()
            .position(|&t| t == tile)
            .filter(|_| tile != BLANK)
            .ok_or(SlideError::NoSuchTile(tile))?;
        let blank = self.blank_index();
        let (Vec2(x1, y1), Vec2(x2, y2)) = (self.position(idx), self.position(blank));
        if x1.abs_diff(x2) + y1.abs_diff(y2) != 1 {
            return Err(SlideError::NotAdjacent(tile));
        }
        Ok(self.swapped(idx, blank))
    }
}
