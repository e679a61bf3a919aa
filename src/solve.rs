use log::debug;
use thiserror::Error;

use crate::frontier::{Fifo, Frontier, MinHeap};
use crate::heuristic::manhattan;
use crate::node::{Node, NodeArena, NodeId};
use crate::parity::is_solvable;
use crate::store::{BoardId, VisitedStore};
use crate::{Board, Cost, Tile};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// FIFO frontier, unit edge costs. The first visit of a board is optimal.
    BreadthFirst,
    /// Min-heap frontier keyed by `g + manhattan`.
    #[default]
    BestFirst,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Upper bound on search nodes created. `None` grows without bound.
    pub max_nodes: Option<usize>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub expanded: usize,
    pub generated: usize,
    pub stale_skipped: usize,
    /// Distinct boards in the visited store.
    pub stored: usize,
    pub nodes: usize,
    pub peak_frontier: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub moves: Vec<Tile>,
    pub stats: SearchStats,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved(Solution),
    /// Rejected by the parity test. No search was run.
    Unsolvable,
}

impl Outcome {
    pub fn moves(&self) -> Option<&[Tile]> {
        match self {
            Outcome::Solved(solution) => Some(&solution.moves),
            Outcome::Unsolvable => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("search exceeded the limit of {limit} nodes")]
    CapacityExceeded { limit: usize },
    #[error("frontier exhausted on a board that passed the parity test")]
    Exhausted,
}

/// Find a shortest sequence of tile slides from `board` to the goal board.
///
/// `on_step` is called once per frontier extraction.
pub fn solve(
    board: &Board,
    strategy: Strategy,
    limits: &Limits,
    on_step: impl FnMut(),
) -> Result<Outcome, SolveError> {
    solve_with(board, strategy, limits, on_step, |_, _| {})
}

/// Like [`solve`], additionally calling `on_expand` with every board the
/// search expands and the path cost it was expanded at.
pub fn solve_with(
    board: &Board,
    strategy: Strategy,
    limits: &Limits,
    on_step: impl FnMut(),
    on_expand: impl FnMut(&Board, Cost),
) -> Result<Outcome, SolveError> {
    if !is_solvable(board) {
        debug!("Board fails the parity test, search skipped");
        return Ok(Outcome::Unsolvable);
    }
    let solution = match strategy {
        Strategy::BreadthFirst => {
            Search::new(Fifo::default(), false, limits).run(board, on_step, on_expand)
        }
        Strategy::BestFirst => {
            Search::new(MinHeap::default(), true, limits).run(board, on_step, on_expand)
        }
    }?;
    Ok(Outcome::Solved(solution))
}

struct Search<F> {
    frontier: F,
    guided: bool,
    store: VisitedStore,
    nodes: NodeArena,
    max_nodes: Option<usize>,
    stats: SearchStats,
}

impl<F: Frontier> Search<F> {
    fn new(frontier: F, guided: bool, limits: &Limits) -> Self {
        Self {
            frontier,
            guided,
            store: VisitedStore::new(),
            nodes: NodeArena::new(),
            max_nodes: limits.max_nodes,
            stats: SearchStats::default(),
        }
    }

    fn priority(&self, node: &Node) -> Cost {
        if self.guided {
            node.g + manhattan(self.store.board(node.board))
        } else {
            node.g
        }
    }

    fn admit(&mut self, board: Board, g: Cost) -> Option<BoardId> {
        if self.guided {
            self.store.record_if_better(board, g)
        } else {
            self.store.insert_new(board, g)
        }
    }

    fn enqueue(&mut self, node: Node) -> Result<NodeId, SolveError> {
        if let Some(limit) = self.max_nodes {
            if self.nodes.len() >= limit {
                debug!("Node limit {limit} reached, {} boards stored", self.store.len());
                return Err(SolveError::CapacityExceeded { limit });
            }
        }
        let priority = self.priority(&node);
        let id = self.nodes.push(node);
        self.frontier.push(id, priority);
        self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len());
        Ok(id)
    }

    fn run(
        mut self,
        start: &Board,
        mut on_step: impl FnMut(),
        mut on_expand: impl FnMut(&Board, Cost),
    ) -> Result<Solution, SolveError> {
        let board = self.store.record(start.clone(), 0);
        self.enqueue(Node {
            board,
            g: 0,
            parent: None,
            moved: None,
        })?;
        debug!(
            "Search seeded, guided: {}, size: {}",
            self.guided,
            start.size(),
        );

        while let Some(id) = self.frontier.pop() {
            on_step();

            #[cfg(feature = "coz")]
            coz::progress!("Extract");

            let node = *self.nodes.get(id);

            // A cheaper path to this board was recorded after this node was queued.
            // Strictly greater: an equal cost is the node that set the record.
            if self.guided && node.g > self.store.cost(node.board) {
                self.stats.stale_skipped += 1;
                continue;
            }

            let board = self.store.board(node.board);
            if board.is_goal() {
                return Ok(self.finish(id));
            }

            #[cfg(feature = "coz")]
            coz::scope!("Expand");

            on_expand(board, node.g);
            let successors = board.successors();
            self.stats.expanded += 1;
            for (next, tile) in successors {
                self.stats.generated += 1;
                let g = node.g + 1;
                let Some(board) = self.admit(next, g) else { continue };
                self.enqueue(Node {
                    board,
                    g,
                    parent: Some(id),
                    moved: Some(tile),
                })?;
            }
        }

        debug!(
            "Frontier exhausted after {} expansions, {} boards stored",
            self.stats.expanded,
            self.store.len(),
        );
        Err(SolveError::Exhausted)
    }

    fn finish(mut self, goal: NodeId) -> Solution {
        self.stats.stored = self.store.len();
        self.stats.nodes = self.nodes.len();
        let moves = self.nodes.path_to(goal);
        debug!("Goal reached in {} moves, {:?}", moves.len(), self.stats);
        Solution {
            moves,
            stats: self.stats,
        }
    }
}
