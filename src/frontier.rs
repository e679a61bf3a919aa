//! Discovered-but-unexpanded nodes.
//!
//! [`Fifo`] drives breadth-first search and ignores priorities. [`MinHeap`]
//! drives best-first search: lowest priority first, equal priorities in
//! insertion order so runs are reproducible. Neither supports decrease-key;
//! superseded entries stay queued and are filtered by the driver.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::node::NodeId;
use crate::Cost;

pub trait Frontier {
    fn push(&mut self, node: NodeId, priority: Cost);

    fn pop(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Default)]
pub struct Fifo {
    queue: VecDeque<NodeId>,
}

impl Frontier for Fifo {
    fn push(&mut self, node: NodeId, _priority: Cost) {
        self.queue.push_back(node);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

#[derive(Debug, Default)]
pub struct MinHeap {
    // (priority, insertion sequence, node), reversed into a min-heap.
    heap: BinaryHeap<Reverse<(Cost, u64, NodeId)>>,
    seq: u64,
}

impl Frontier for MinHeap {
    fn push(&mut self, node: NodeId, priority: Cost) {
        self.heap.push(Reverse((priority, self.seq, node)));
        self.seq += 1;
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|Reverse((_, _, node))| node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
