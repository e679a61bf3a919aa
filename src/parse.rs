use std::str::FromStr;

use anyhow::{bail, ensure, Context, Result};

use crate::solve::Strategy;
use crate::{Board, Tile, MAX_SIZE};

/// Puzzle file: `#` lines are headers, then the side length `k`, then the
/// `k*k` tiles in row-major order with `0` as the blank.
impl FromStr for Board {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.starts_with('#'))
            .flat_map(|line| line.split_whitespace());

        let size = tokens.next().context("Missing board size")?;
        let size = size
            .parse::<u8>()
            .with_context(|| format!("Invalid board size: {size:?}"))?;
        ensure!(
            (2..=MAX_SIZE).contains(&size),
            "Board size {size} out of range 2..={MAX_SIZE}",
        );

        let len = size as usize * size as usize;
        let mut seen = vec![false; len];
        let mut tiles = Vec::with_capacity(len);
        for (tok, i) in tokens.zip(1..) {
            ensure!(tiles.len() < len, "Too many tiles, expecting {len}");
            let tile = tok
                .parse::<Tile>()
                .ok()
                .filter(|&t| (t as usize) < len)
                .with_context(|| format!("Invalid tile {i}: {tok:?}"))?;
            ensure!(!seen[tile as usize], "Duplicated tile {tile}");
            seen[tile as usize] = true;
            tiles.push(tile);
        }
        ensure!(
            tiles.len() == len,
            "Expecting {len} tiles, found {}",
            tiles.len(),
        );

        Ok(Board::new(size, tiles))
    }
}

impl FromStr for Strategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "bfs" | "breadth-first" => Self::BreadthFirst,
            "astar" | "best-first" => Self::BestFirst,
            _ => bail!("Invalid strategy: {s:?}, expecting `bfs` or `astar`"),
        })
    }
}
