use std::collections::BinaryHeap;

use crate::searcher::Node;

/// Expansion policy shared by every strategy.
///
/// The traversal loop in [`Searcher`](crate::Searcher) pops a cell, skips it
/// if it was already settled, settles it, and then offers each open,
/// unsettled neighbour back to the frontier. A frontier decides two things:
/// which cell comes out next, and whether an offered neighbour is accepted
/// (updating its distance and predecessor) and queued.
pub(crate) trait Frontier {
    /// Queue the start cell. Its node is already at distance 0.
    fn seed(&mut self, idx: usize, node: &Node);

    /// Next candidate to settle. May return a cell that has been settled
    /// since it was queued; the caller skips those.
    fn pop(&mut self) -> Option<usize>;

    /// Offer cell `idx`, reachable from settled cell `from` at distance `g`.
    fn offer(&mut self, idx: usize, node: &mut Node, from: usize, g: i32);
}

// ---------------------------------------------------------------------------
// Open list for the priority-ordered strategies
// ---------------------------------------------------------------------------

/// Heap entry ordered by `key`, then by insertion order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) key: i32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest key first, and the
        // earliest insertion among equal keys.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue with stable FIFO tie-breaking.
///
/// Entries are never updated in place: an improved cell is pushed again and
/// the outdated entry is skipped when it surfaces.
#[derive(Debug, Default)]
pub(crate) struct OpenList {
    heap: BinaryHeap<NodeRef>,
    seq: u64,
}

impl OpenList {
    pub(crate) fn push(&mut self, idx: usize, key: i32) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(NodeRef { idx, key, seq });
    }

    pub(crate) fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|r| r.idx)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
