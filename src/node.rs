//! Search-tree nodes and path reconstruction.
//!
//! Every node lives in a [`NodeArena`] owned by one search and dropped with
//! it. Predecessors are arena indices, written once when the child is
//! created, so the links always form a tree rooted at the start node.

use crate::store::BoardId;
use crate::{Cost, Tile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub board: BoardId,
    pub g: Cost,
    pub parent: Option<NodeId>,
    /// The tile slid to reach this node. `None` only on the start node.
    pub moved: Option<Tile>,
}

#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn push(&mut self, node: Node) -> NodeId {
        debug_assert!(node.parent.map_or(true, |NodeId(p)| p < self.nodes.len()));
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// The tiles moved from the start node to `goal`, in playing order.
    pub fn path_to(&self, goal: NodeId) -> Vec<Tile> {
        let mut moves = std::iter::successors(Some(self.get(goal)), |node| {
            node.parent.map(|id| self.get(id))
        })
        .map_while(|node| node.moved)
        .collect::<Vec<_>>();
        moves.reverse();
        moves
    }
}
