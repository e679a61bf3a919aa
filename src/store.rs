//! Visited-board deduplication.
//!
//! Boards are bucketed by their `FxHasher` fingerprint and compared in full
//! on collision. Each distinct board is stored once, together with the
//! cheapest path cost known to reach it. The insertion index of a board is
//! stable for the lifetime of the store, so search nodes refer to their
//! board by [`BoardId`] instead of carrying a copy.

use indexmap::map::Entry;

use crate::{Board, Cost};

type IndexMap<K, V> = indexmap::IndexMap<K, V, fxhash::FxBuildHasher>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoardId(pub usize);

#[derive(Debug, Default)]
pub struct VisitedStore {
    best: IndexMap<Board, Cost>,
}

impl VisitedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    pub fn contains(&self, board: &Board) -> bool {
        self.best.contains_key(board)
    }

    pub fn best_known_cost(&self, board: &Board) -> Option<Cost> {
        self.best.get(board).copied()
    }

    pub fn board(&self, id: BoardId) -> &Board {
        self.best.get_index(id.0).expect("BoardId from another store").0
    }

    pub fn cost(&self, id: BoardId) -> Cost {
        *self.best.get_index(id.0).expect("BoardId from another store").1
    }

    /// Records `board` at `cost`, overwriting any previous cost.
    pub fn record(&mut self, board: Board, cost: Cost) -> BoardId {
        let (idx, _) = self.best.insert_full(board, cost);
        BoardId(idx)
    }

    /// Set-style insertion: records `board` only if it was never seen.
    pub fn insert_new(&mut self, board: Board, cost: Cost) -> Option<BoardId> {
        match self.best.entry(board) {
            Entry::Occupied(_) => None,
            Entry::Vacant(ent) => {
                let id = BoardId(ent.index());
                ent.insert(cost);
                Some(id)
            }
        }
    }

    /// Records `board` if unseen, or lowers its cost if `cost` is strictly
    /// cheaper. Returns the board's id when the store changed.
    pub fn record_if_better(&mut self, board: Board, cost: Cost) -> Option<BoardId> {
        match self.best.entry(board) {
            Entry::Occupied(mut ent) => {
                if cost < *ent.get() {
                    ent.insert(cost);
                    Some(BoardId(ent.index()))
                } else {
                    None
                }
            }
            Entry::Vacant(ent) => {
                let id = BoardId(ent.index());
                ent.insert(cost);
                Some(id)
            }
        }
    }
}
